#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    SaveFailed,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::SaveFailed => {
                "Progress could not be saved. Your answers are kept for this session."
            }
        }
    }
}
