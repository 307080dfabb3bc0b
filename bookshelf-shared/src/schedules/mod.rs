//! State of the pickup schedule listing

use crate::{ApiError, Schedule};

#[cfg(test)]
mod test;

/// What the listing should show right now
#[derive(Debug, PartialEq, Eq)]
pub enum ScheduleListView<'a> {
    Loading,
    Empty,
    Populated(&'a [Schedule]),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScheduleList {
    loading: bool,
    schedules: Vec<Schedule>,
}
impl ScheduleList {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Finish a load started with [`ScheduleList::begin_load`]
    ///
    /// Loading ends either way. On failure the previous schedules stay and the error is handed
    /// back to be reported.
    pub fn finish_load(&mut self, result: Result<Vec<Schedule>, ApiError>) -> Result<usize, ApiError> {
        self.loading = false;
        let schedules = result?;
        self.schedules = schedules;
        Ok(self.schedules.len())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    pub fn view(&self) -> ScheduleListView<'_> {
        if self.loading {
            ScheduleListView::Loading
        } else if self.schedules.is_empty() {
            ScheduleListView::Empty
        } else {
            ScheduleListView::Populated(&self.schedules)
        }
    }
}
