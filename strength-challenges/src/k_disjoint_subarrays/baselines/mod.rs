pub mod prefix_dp;
