pub mod api_utils;
pub mod dom;
pub mod empty_state;
pub mod icons;
pub mod number_format;
pub mod storage;
pub mod tabs;
