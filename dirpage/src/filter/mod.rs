pub trait FileFilter {
    fn matches(&self, name: &str) -> bool;
}

mod suffix;

pub use suffix::SuffixFilter;
