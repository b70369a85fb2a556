pub mod shatter;
