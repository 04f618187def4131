// Logical input actions and the held-key flag set consumed each tick.

const ACTION_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

impl Action {
    fn slot(self) -> usize {
        self as usize
    }
}

/// A physical key resolved to its action and which alias of that action it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundKey {
    pub action: Action,
    pub alias: u8,
}

/// Maps normalized key identifiers onto actions.
///
/// Every action may have several aliases (up to 8); the alias index lets the
/// held set keep one bit per physical key.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<(String, BoundKey)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: Vec::new(),
        };
        bindings.bind(Action::Up, &["w", "arrowup"]);
        bindings.bind(Action::Down, &["s", "arrowdown"]);
        bindings.bind(Action::Left, &["a", "arrowleft"]);
        bindings.bind(Action::Right, &["d", "arrowright"]);
        bindings.bind(Action::Fire, &[" ", "space", "spacebar"]);
        bindings
    }
}

impl KeyBindings {
    /// Adds aliases for `action`, continuing its alias numbering.
    pub fn bind(&mut self, action: Action, keys: &[&str]) {
        let mut alias = self
            .bindings
            .iter()
            .filter(|(_, bound)| bound.action == action)
            .count();
        for key in keys {
            assert!(alias < 8, "too many aliases for {action:?}");
            self.bindings.push((
                normalize_key(key),
                BoundKey {
                    action,
                    alias: alias as u8,
                },
            ));
            alias += 1;
        }
    }

    /// Resolves a raw key identifier, ignoring case.
    pub fn resolve(&self, raw_key: &str) -> Option<BoundKey> {
        let key = normalize_key(raw_key);
        self.bindings
            .iter()
            .find(|(bound_key, _)| *bound_key == key)
            .map(|(_, bound)| *bound)
    }
}

/// Lower-cases a key identifier. A lone space is kept as-is so the space bar
/// still resolves.
pub fn normalize_key(raw_key: &str) -> String {
    if raw_key == " " {
        return raw_key.to_string();
    }
    raw_key.trim().to_lowercase()
}

/// Which physical keys are currently held, grouped by action.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: [u8; ACTION_COUNT],
}

impl InputState {
    /// Records a key transition; the most recent event for a key wins.
    pub fn set(&mut self, key: BoundKey, pressed: bool) {
        let bit = 1u8 << key.alias;
        let slot = &mut self.held[key.action.slot()];
        if pressed {
            *slot |= bit;
        } else {
            *slot &= !bit;
        }
    }

    /// An action is active while any of its aliases is held.
    pub fn is_active(&self, action: Action) -> bool {
        self.held[action.slot()] != 0
    }
}
