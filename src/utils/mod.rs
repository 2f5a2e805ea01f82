// Utils compartidos

pub mod gsap_ffi;
