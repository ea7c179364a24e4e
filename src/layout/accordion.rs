/// Exclusive-open state of the FAQ list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Opening an entry closes every other one; toggling the open entry closes it.
    pub fn toggled(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        let open = if self.open == Some(index) { None } else { Some(index) };
        Self { open, ..self }
    }
}
