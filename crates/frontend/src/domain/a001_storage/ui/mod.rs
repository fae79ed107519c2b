mod picker;

pub use picker::StoragePicker;
