mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::LoginEffect;
pub use intent::LoginIntent;
pub use reducer::LoginReducer;
pub use state::{LoginFormState, Screen};
