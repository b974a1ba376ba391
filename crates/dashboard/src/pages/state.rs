/// Lifecycle of a page's list.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<E> {
    Idle,
    Loading,
    Loaded { items: Vec<E> },
    Error { message: String },
}

impl<E> Default for LoadState<E> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<E> LoadState<E> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn items(&self) -> Option<&[E]> {
        match self {
            LoadState::Loaded { items } => Some(items),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// Which modal is open, and for which record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog<Id> {
    None,
    Create,
    Edit(Id),
    Delete(Id),
    View(Id),
}

impl<Id> Default for Dialog<Id> {
    fn default() -> Self {
        Dialog::None
    }
}

impl<Id: Copy> Dialog<Id> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::None)
    }

    pub fn target(&self) -> Option<Id> {
        match self {
            Dialog::Edit(id) | Dialog::Delete(id) | Dialog::View(id) => Some(*id),
            Dialog::None | Dialog::Create => None,
        }
    }
}
