use bitflags::bitflags;

bitflags! {
    /// Free per-check rerolls owned by the mover.
    ///
    /// Each skill rerolls one failed check of its kind, at most once per path,
    /// without drawing from the shared reroll pool.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Skills: u8 {
        const DODGE      = 1 << 0;
        const SURE_FEET  = 1 << 1;
        const SURE_HANDS = 1 << 2;
    }
}
