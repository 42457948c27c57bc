pub mod k_disjoint_subarrays;
pub use k_disjoint_subarrays as c001;
