/// Which engine [`compare_with`](crate::compare_with) runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Algorithm {
    /// Run the engine directly on the transformed elements.
    Myers,
    /// Drop elements unique to one side first, when enough of them are.
    #[default]
    Optimized,
}

/// Tunables of a comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareOptions {
    pub algorithm: Algorithm,
    /// The reduced path is taken while the number of elements shared by
    /// both sequences, counted on both sides, is at most this factor times
    /// the length of the original sequence.
    pub reduction_threshold: f64,
}

impl Default for CompareOptions {
    fn default() -> Self {
        CompareOptions {
            algorithm: Algorithm::Optimized,
            reduction_threshold: 1.0,
        }
    }
}

impl CompareOptions {
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_reduction_threshold(mut self, threshold: f64) -> Self {
        self.reduction_threshold = threshold;
        self
    }

    pub(crate) fn reduces(&self, shared: usize, original_len: usize) -> bool {
        if self.algorithm != Algorithm::Optimized {
            return false;
        }
        // avoids `inf * 0`
        if original_len == 0 {
            return shared == 0;
        }
        shared as f64 <= self.reduction_threshold * original_len as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gate() {
        let options = CompareOptions::default();
        assert!(options.reduces(4, 4));
        assert!(!options.reduces(5, 4));
        assert!(options.reduces(0, 0));
    }

    #[test]
    fn test_infinite_threshold_always_reduces() {
        let options = CompareOptions::default().with_reduction_threshold(f64::INFINITY);
        assert!(options.reduces(1000, 10));
        assert!(options.reduces(0, 0));
    }

    #[test]
    fn test_myers_never_reduces() {
        let options = CompareOptions::default().with_algorithm(Algorithm::Myers);
        assert!(!options.reduces(0, 10));
    }
}
