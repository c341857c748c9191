use std::cmp::Ordering;

///Wrapper around the [`float_cmp::approx_eq!()`] macro for easy comparison of floats.
///Two FPAs are considered equal when they are within a few ULPs of each other.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl PartialEq for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0)
    }
}

impl PartialOrd for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}
