use bitflags::bitflags;
use smallvec::SmallVec;

bitflags! {
    /// Visual classes a renderer reads off a widget. How they are shown
    /// (css classes, colors, opacity) is up to the renderer.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct VisualState: u8 {
        const HAS_VALUE = 1 << 0;
        const EXPANDED  = 1 << 1;
        const DISABLED  = 1 << 2;
        /// Not yet measured; hosts keep the widget hidden.
        const PENDING   = 1 << 3;
    }
}

impl VisualState {
    pub fn has_value(&self) -> bool {
        self.contains(Self::HAS_VALUE)
    }
    pub fn expanded(&self) -> bool {
        self.contains(Self::EXPANDED)
    }
    pub fn disabled(&self) -> bool {
        self.contains(Self::DISABLED)
    }
    pub fn pending(&self) -> bool {
        self.contains(Self::PENDING)
    }

    pub fn class_names(&self) -> SmallVec<[&'static str; 4]> {
        let mut out = SmallVec::new();
        if self.has_value() {
            out.push("hasValue");
        }
        if self.expanded() {
            out.push("expanded");
        }
        if self.disabled() {
            out.push("disabled");
        }
        if self.pending() {
            out.push("pending");
        }
        out
    }
}
