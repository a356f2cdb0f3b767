//! Расчётные сроки: самое раннее начало и самое позднее окончание
//! по вложенным этапам (корень → дочерние записи → этапы с датами).
//!
//! Битые и пустые даты отбрасываются молча, функции никогда не падают.
//! Свёртка двухуровневая (экстремум внутри дочерней записи, затем по всем
//! дочерним) и совпадает с плоской свёрткой по всем датам этапов.

use chrono::{DateTime, Utc};

use super::date_utils::parse_instant;

/// Запись, у которой могут быть даты начала и окончания
pub trait DateHolder {
    fn start_date(&self) -> Option<&str>;
    fn end_date(&self) -> Option<&str>;
}

/// Дочерняя запись корня со своими этапами (изделие → этапы работ)
pub trait StageContainer {
    type Stage: DateHolder;

    fn stages(&self) -> &[Self::Stage];
}

/// Корень, для которого считаются сроки (проект → изделия)
pub trait IntervalBearing {
    type Child: StageContainer;

    fn children(&self) -> &[Self::Child];
}

#[derive(Debug, Clone, Copy)]
enum Edge {
    Start,
    End,
}

impl Edge {
    fn raw<S: DateHolder>(self, stage: &S) -> Option<&str> {
        match self {
            Edge::Start => stage.start_date(),
            Edge::End => stage.end_date(),
        }
    }

    fn pick(self, a: DateTime<Utc>, b: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Edge::Start => a.min(b),
            Edge::End => a.max(b),
        }
    }
}

fn child_extreme<C: StageContainer>(child: &C, edge: Edge) -> Option<DateTime<Utc>> {
    child
        .stages()
        .iter()
        .filter_map(|stage| edge.raw(stage))
        .filter_map(parse_instant)
        .reduce(|a, b| edge.pick(a, b))
}

fn root_extreme<R: IntervalBearing>(root: &R, edge: Edge) -> Option<DateTime<Utc>> {
    root.children()
        .iter()
        .filter_map(|child| child_extreme(child, edge))
        .reduce(|a, b| edge.pick(a, b))
}

/// Самая ранняя дата начала среди всех этапов корня
pub fn earliest_start<R: IntervalBearing>(root: &R) -> Option<DateTime<Utc>> {
    root_extreme(root, Edge::Start)
}

/// Самая поздняя дата окончания среди всех этапов корня
pub fn latest_end<R: IntervalBearing>(root: &R) -> Option<DateTime<Utc>> {
    root_extreme(root, Edge::End)
}
