pub mod stage1_filter;
pub mod stage2_overall;
pub mod stage3_classify;
pub mod stage4_report;
