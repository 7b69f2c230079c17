use renfa_core::StateId;

/// Conversion-scoped source of fresh state names.
#[derive(Debug, Default)]
pub struct NameGenerator {
    next: u32,
}

impl NameGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A name never returned before by this generator.
    pub fn fresh(&mut self) -> StateId {
        let id = StateId::new(self.next);
        self.next += 1;
        id
    }

    /// Number of names handed out so far.
    pub fn issued(&self) -> u32 {
        self.next
    }
}
