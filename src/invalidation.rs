use bitflags::bitflags;

bitflags! {
    /// Flags describing what changed since the host last looked
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// Geometry changed (resize); anything cached from layout is stale
        const NEEDS_LAYOUT    = 0b001;
        /// Something visible moved or changed color
        const NEEDS_PAINT     = 0b010;
        /// The liquid surface finished a level transition this frame
        const SURFACE_SETTLED = 0b100;
    }
}

impl Default for ChangeFlags {
    fn default() -> Self {
        ChangeFlags::empty()
    }
}

impl ChangeFlags {
    pub fn needs_paint(&self) -> bool {
        self.contains(ChangeFlags::NEEDS_PAINT)
    }

    pub fn needs_layout(&self) -> bool {
        self.contains(ChangeFlags::NEEDS_LAYOUT)
    }

    pub fn surface_settled(&self) -> bool {
        self.contains(ChangeFlags::SURFACE_SETTLED)
    }
}
