/// A nav link as rendered in the header.
#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Which nav item is active. There is always exactly one while the list is non-empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSelection {
    len: usize,
    active: usize,
}

impl NavSelection {
    pub fn new(len: usize, initial: usize) -> Self {
        Self {
            len,
            active: if initial < len { initial } else { 0 },
        }
    }

    pub fn active(&self) -> Option<usize> {
        (self.len > 0).then_some(self.active)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active() == Some(index)
    }

    pub fn activated(self, index: usize) -> Self {
        if index < self.len {
            Self { active: index, ..self }
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activating_leaves_exactly_one_active() {
        let selection = NavSelection::new(4, 0);
        for target in 0..4 {
            let next = selection.activated(target);
            let active: Vec<usize> = (0..4).filter(|i| next.is_active(*i)).collect();
            assert_eq!(active, vec![target]);
        }
    }

    #[test]
    fn out_of_range_click_keeps_current_item() {
        let selection = NavSelection::new(3, 1).activated(7);
        assert_eq!(selection.active(), Some(1));
    }

    #[test]
    fn bad_initial_index_falls_back_to_first() {
        assert_eq!(NavSelection::new(3, 9).active(), Some(0));
        assert_eq!(NavSelection::new(0, 0).active(), None);
    }
}
