//! List stagger
//!
//! Assigns each item of an ordered list a start delay of
//! `base + index * step`, so entrances cascade in list order. Delays depend
//! only on position, never on item content.

/// Delay schedule for sibling entrances
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    /// Delay of the first item (ms)
    pub base_ms: u32,
    /// Added per position (ms)
    pub step_ms: u32,
    /// Optional: positions past this one reuse its delay
    pub limit: Option<usize>,
}

/// An item paired with its position and computed delay
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Staggered<T> {
    pub index: usize,
    pub delay_ms: u32,
    pub item: T,
}

impl Stagger {
    pub fn new(base_ms: u32, step_ms: u32) -> Self {
        Self {
            base_ms,
            step_ms,
            limit: None,
        }
    }

    /// Limit the cascade to the first N steps
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Calculate delay for a specific index
    pub fn delay_for_index(&self, index: usize) -> u32 {
        let capped = self.limit.map_or(index, |limit| index.min(limit));
        let capped = u32::try_from(capped).unwrap_or(u32::MAX);
        self.base_ms
            .saturating_add(self.step_ms.saturating_mul(capped))
    }

    /// Pair every item with its delay, preserving order
    pub fn assign<T, I>(&self, items: I) -> Vec<Staggered<T>>
    where
        I: IntoIterator<Item = T>,
    {
        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| Staggered {
                index,
                delay_ms: self.delay_for_index(index),
                item,
            })
            .collect()
    }
}

impl Default for Stagger {
    fn default() -> Self {
        Self::new(100, 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_follow_position() {
        let stagger = Stagger::new(200, 200);
        let delays: Vec<u32> = stagger
            .assign(["Profile", "Content", "Settings"])
            .into_iter()
            .map(|s| s.delay_ms)
            .collect();
        assert_eq!(delays, vec![200, 400, 600]);
    }

    #[test]
    fn test_delays_never_decrease() {
        for stagger in [
            Stagger::new(100, 50),
            Stagger::new(0, 0),
            Stagger::new(100, 150).limit(3),
            Stagger::new(u32::MAX - 10, 7),
        ] {
            let items = stagger.assign(0..64);
            for pair in items.windows(2) {
                assert!(pair[0].delay_ms <= pair[1].delay_ms, "{stagger:?}");
            }
        }
    }

    #[test]
    fn test_reordering_moves_delays_with_position() {
        let stagger = Stagger::new(100, 100);
        let forward = stagger.assign(["a", "b", "c"]);
        let reversed = stagger.assign(["c", "b", "a"]);

        assert_eq!(forward[0].item, "a");
        assert_eq!(reversed[0].item, "c");
        assert_eq!(forward[0].delay_ms, reversed[0].delay_ms);
        assert_eq!(reversed[2].delay_ms, 300);
    }

    #[test]
    fn test_limit_caps_cascade() {
        let stagger = Stagger::new(0, 100).limit(2);
        assert_eq!(stagger.delay_for_index(1), 100);
        assert_eq!(stagger.delay_for_index(2), 200);
        assert_eq!(stagger.delay_for_index(10), 200);
    }

    #[test]
    fn test_huge_index_saturates() {
        let stagger = Stagger::new(10, 1000);
        assert_eq!(stagger.delay_for_index(usize::MAX), u32::MAX);
    }
}
