/// Edge weight type
pub type Weight = f64;
