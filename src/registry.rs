use crate::error::{Error, Result};

/// Fixed, ordered set of slides. Never empty, never mutated after `new`.
pub struct SlideRegistry<S> {
    slides: Vec<S>,
}

impl<S> SlideRegistry<S> {
    pub fn new(slides: Vec<S>) -> Result<Self> {
        if slides.is_empty() {
            return Err(Error::EmptyRegistry);
        }
        Ok(Self { slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Panics when `index >= len()`. Callers that hold a controller never
    /// produce such an index; use `try_get` for untrusted input.
    pub fn get(&self, index: usize) -> &S {
        assert!(
            index < self.slides.len(),
            "slide index {} out of range for {} slides",
            index,
            self.slides.len()
        );
        &self.slides[index]
    }

    pub fn try_get(&self, index: usize) -> Result<&S> {
        self.slides
            .get(index)
            .ok_or_else(|| Error::out_of_range(index, self.slides.len()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.slides.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic;

    #[test]
    fn test_empty_registry_is_rejected() {
        let result = SlideRegistry::<&str>::new(Vec::new());
        assert!(matches!(result, Err(Error::EmptyRegistry)));
    }

    #[test]
    fn test_len_and_get() {
        let registry = SlideRegistry::new(vec!["a", "b", "c"]).unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(*registry.get(0), "a");
        assert_eq!(*registry.get(2), "c");
    }

    #[test]
    fn test_get_out_of_range_panics() {
        let registry = SlideRegistry::new(vec![1, 2]).unwrap();
        let result = panic::catch_unwind(|| *registry.get(2));
        assert!(result.is_err());
    }

    #[test]
    fn test_try_get_out_of_range() {
        let registry = SlideRegistry::new(vec![1, 2]).unwrap();
        assert_eq!(registry.try_get(1), Ok(&2));
        assert_eq!(registry.try_get(5), Err(Error::out_of_range(5, 2)));
    }

    #[test]
    fn test_iter_keeps_order() {
        let registry = SlideRegistry::new(vec![3, 1, 2]).unwrap();
        let seen: Vec<_> = registry.iter().copied().collect();
        assert_eq!(seen, vec![3, 1, 2]);
    }
}
