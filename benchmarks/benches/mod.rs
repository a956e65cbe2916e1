pub mod uni_tc_bench;
