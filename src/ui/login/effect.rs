use crate::ui::mvi::Effect;

/// Network work requested by a reduction.
///
/// The session executes the call and feeds the outcome back as a
/// completion intent. At most one effect is emitted per reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEffect {
    SubmitLogin { email: String, password: String },
    SubmitLogout { email: String },
}

impl Effect for LoginEffect {}
