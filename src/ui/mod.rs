pub mod audio;
pub mod clock;
pub mod common;
pub mod hero;
pub mod local_storage;
pub mod pages;
pub mod waitlist_form;

pub use audio::{SoundContext, SoundToggle, provide_sound_context, use_sound_context};
pub use hero::Hero;
pub use pages::{LandingPage, NotFoundPage};
pub use waitlist_form::WaitlistForm;
