//! Vocabularies shared by many calculators.

use crate::choice;

choice! {
    /// Binary criterion as sent on the wire.
    pub enum YesNo {
        Yes => "yes",
        No => "no",
    }
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }

    /// `points` when the criterion is present, otherwise 0.
    pub fn points(self, points: i64) -> i64 {
        if self.is_yes() { points } else { 0 }
    }
}

impl From<bool> for YesNo {
    fn from(v: bool) -> Self {
        if v { YesNo::Yes } else { YesNo::No }
    }
}

choice! {
    pub enum Sex {
        Male => "male",
        Female => "female",
    }
}

impl Sex {
    pub fn is_female(self) -> bool {
        self == Sex::Female
    }
}
