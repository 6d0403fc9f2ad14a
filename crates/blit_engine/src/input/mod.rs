//! Key symbols and the fixed key-binding table

use crate::assets::AssetSlot;
use sdl2::keyboard::Keycode;
use std::collections::HashMap;

/// The closed set of input symbols a session reacts to
///
/// Everything outside the four arrow keys collapses into [`KeySymbol::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySymbol {
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Any key without a binding
    Other,
}

impl KeySymbol {
    /// Map a host keycode into the closed symbol set
    pub fn from_keycode(keycode: Keycode) -> Self {
        match keycode {
            Keycode::Up => Self::Up,
            Keycode::Down => Self::Down,
            Keycode::Left => Self::Left,
            Keycode::Right => Self::Right,
            _ => Self::Other,
        }
    }
}

/// Fixed mapping from key symbols to asset identity
///
/// Built once at load time and read on every key-down event. A symbol
/// without a binding resolves to [`AssetSlot::Default`].
#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<KeySymbol, AssetSlot>,
}

impl KeyBindings {
    /// Build a binding table from symbol/slot pairs
    pub fn new(pairs: &[(KeySymbol, AssetSlot)]) -> Self {
        Self {
            map: pairs.iter().copied().collect(),
        }
    }

    /// The canonical arrow-key table: each arrow selects its own slot
    pub fn arrows() -> Self {
        Self::new(&[
            (KeySymbol::Up, AssetSlot::Up),
            (KeySymbol::Down, AssetSlot::Down),
            (KeySymbol::Left, AssetSlot::Left),
            (KeySymbol::Right, AssetSlot::Right),
        ])
    }

    /// An empty table; every key resolves to the default slot
    pub fn none() -> Self {
        Self::new(&[])
    }

    /// Resolve a symbol to the slot it selects
    ///
    /// Unrecognized symbols reset the selection to the default slot rather
    /// than leaving it unchanged.
    pub fn resolve(&self, symbol: KeySymbol) -> AssetSlot {
        self.map
            .get(&symbol)
            .copied()
            .unwrap_or(AssetSlot::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_select_their_own_slots() {
        let bindings = KeyBindings::arrows();
        assert_eq!(bindings.resolve(KeySymbol::Up), AssetSlot::Up);
        assert_eq!(bindings.resolve(KeySymbol::Down), AssetSlot::Down);
        assert_eq!(bindings.resolve(KeySymbol::Left), AssetSlot::Left);
        assert_eq!(bindings.resolve(KeySymbol::Right), AssetSlot::Right);
    }

    #[test]
    fn unrecognized_symbol_resets_to_default() {
        let bindings = KeyBindings::arrows();
        assert_eq!(bindings.resolve(KeySymbol::Other), AssetSlot::Default);
    }

    #[test]
    fn empty_table_always_resolves_default() {
        let bindings = KeyBindings::none();
        assert_eq!(bindings.resolve(KeySymbol::Up), AssetSlot::Default);
        assert_eq!(bindings.resolve(KeySymbol::Other), AssetSlot::Default);
    }

    #[test]
    fn keycode_mapping_covers_the_arrows() {
        assert_eq!(KeySymbol::from_keycode(Keycode::Up), KeySymbol::Up);
        assert_eq!(KeySymbol::from_keycode(Keycode::Z), KeySymbol::Other);
        assert_eq!(KeySymbol::from_keycode(Keycode::Escape), KeySymbol::Other);
    }
}
