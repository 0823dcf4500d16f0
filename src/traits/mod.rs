pub mod mixer_device;
