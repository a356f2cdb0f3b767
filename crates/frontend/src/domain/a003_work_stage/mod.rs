pub mod api;
pub mod ui;

use contracts::domain::a003_work_stage::WorkStageDto;

use crate::shared::timeline::DateHolder;

impl DateHolder for WorkStageDto {
    fn start_date(&self) -> Option<&str> {
        self.start_date.as_deref()
    }

    fn end_date(&self) -> Option<&str> {
        self.end_date.as_deref()
    }
}
