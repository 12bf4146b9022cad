use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::model::{ChartKind, Dataset};

// =============================================================
// Helpers
// =============================================================

#[derive(Default)]
struct Ledger {
    live: usize,
    paints: usize,
    releases: usize,
    events: Vec<String>,
}

struct FakeSurface {
    name: &'static str,
    ledger: Rc<RefCell<Ledger>>,
    fail_paint: bool,
    bound: bool,
}

impl FakeSurface {
    fn new(name: &'static str, ledger: &Rc<RefCell<Ledger>>) -> Self {
        Self { name, ledger: Rc::clone(ledger), fail_paint: false, bound: false }
    }

    fn failing(name: &'static str, ledger: &Rc<RefCell<Ledger>>) -> Self {
        Self { fail_paint: true, ..Self::new(name, ledger) }
    }
}

impl Surface for FakeSurface {
    fn paint(&mut self, _config: &ChartConfig) -> Result<(), ChartError> {
        let mut ledger = self.ledger.borrow_mut();
        ledger.events.push(format!("paint:{}", self.name));
        if self.fail_paint {
            return Err(ChartError::Canvas("boom".to_owned()));
        }
        ledger.paints += 1;
        if !self.bound {
            self.bound = true;
            ledger.live += 1;
        }
        Ok(())
    }

    fn release(&mut self) {
        let mut ledger = self.ledger.borrow_mut();
        ledger.events.push(format!("release:{}", self.name));
        ledger.releases += 1;
        if self.bound {
            self.bound = false;
            ledger.live -= 1;
        }
    }
}

fn config(label: &str) -> ChartConfig {
    ChartConfig::new(ChartKind::Bar, vec![label.to_owned()])
        .with_dataset(Dataset::new("v", vec![Some(1.0)]))
}

// =============================================================
// replace
// =============================================================

#[test]
fn replace_without_surface_is_noop() {
    let mut slot: ChartSlot<FakeSurface> = ChartSlot::new();
    let built = slot.replace(None, config("a")).unwrap();
    assert!(!built);
    assert!(!slot.is_live());
    assert_eq!(slot.builds(), 0);
}

#[test]
fn replace_without_surface_keeps_existing_chart() {
    let ledger = Rc::new(RefCell::new(Ledger::default()));
    let mut slot = ChartSlot::new();
    slot.replace(Some(FakeSurface::new("first", &ledger)), config("a"))
        .unwrap();

    let built = slot.replace(None, config("b")).unwrap();
    assert!(!built);
    assert_eq!(slot.live().map(|c| c.config().labels.clone()), Some(vec!["a".to_owned()]));
    assert_eq!(ledger.borrow().live, 1);
}

#[test]
fn replace_twice_leaves_exactly_one_live_chart() {
    let ledger = Rc::new(RefCell::new(Ledger::default()));
    let mut slot = ChartSlot::new();

    assert!(slot.replace(Some(FakeSurface::new("first", &ledger)), config("a")).unwrap());
    assert!(slot.replace(Some(FakeSurface::new("second", &ledger)), config("b")).unwrap());

    let ledger = ledger.borrow();
    assert_eq!(ledger.live, 1);
    assert_eq!(ledger.paints, 2);
    assert_eq!(ledger.releases, 1);
    assert_eq!(slot.builds(), 2);
}

#[test]
fn replace_releases_old_chart_before_painting_new_one() {
    let ledger = Rc::new(RefCell::new(Ledger::default()));
    let mut slot = ChartSlot::new();
    slot.replace(Some(FakeSurface::new("first", &ledger)), config("a"))
        .unwrap();
    slot.replace(Some(FakeSurface::new("second", &ledger)), config("b"))
        .unwrap();

    assert_eq!(ledger.borrow().events, vec!["paint:first", "release:first", "paint:second"]);
}

#[test]
fn replace_many_times_never_exceeds_one_live_chart() {
    let ledger = Rc::new(RefCell::new(Ledger::default()));
    let mut slot = ChartSlot::new();
    for _ in 0..10 {
        slot.replace(Some(FakeSurface::new("n", &ledger)), config("a"))
            .unwrap();
        assert_eq!(ledger.borrow().live, 1);
    }
    assert_eq!(slot.builds(), 10);
}

#[test]
fn failed_paint_leaves_slot_empty_and_surface_released() {
    let ledger = Rc::new(RefCell::new(Ledger::default()));
    let mut slot = ChartSlot::new();
    slot.replace(Some(FakeSurface::new("first", &ledger)), config("a"))
        .unwrap();

    let err = slot
        .replace(Some(FakeSurface::failing("broken", &ledger)), config("b"))
        .unwrap_err();
    assert_eq!(err, ChartError::Canvas("boom".to_owned()));
    assert!(!slot.is_live());
    assert_eq!(ledger.borrow().live, 0);
    assert_eq!(ledger.borrow().events.last().map(String::as_str), Some("release:broken"));
    assert_eq!(slot.builds(), 1);
}

// =============================================================
// clear / drop
// =============================================================

#[test]
fn clear_releases_live_chart() {
    let ledger = Rc::new(RefCell::new(Ledger::default()));
    let mut slot = ChartSlot::new();
    slot.replace(Some(FakeSurface::new("first", &ledger)), config("a"))
        .unwrap();
    slot.clear();
    assert!(!slot.is_live());
    assert_eq!(ledger.borrow().live, 0);

    slot.clear();
    assert_eq!(ledger.borrow().releases, 1);
}

#[test]
fn dropping_slot_releases_chart() {
    let ledger = Rc::new(RefCell::new(Ledger::default()));
    {
        let mut slot = ChartSlot::new();
        slot.replace(Some(FakeSurface::new("first", &ledger)), config("a"))
            .unwrap();
    }
    assert_eq!(ledger.borrow().live, 0);
}

#[test]
fn repaint_reuses_bound_surface() {
    let ledger = Rc::new(RefCell::new(Ledger::default()));
    let mut chart = Chart::build(FakeSurface::new("only", &ledger), config("a")).unwrap();
    chart.repaint().unwrap();
    assert_eq!(ledger.borrow().paints, 2);
    assert_eq!(ledger.borrow().live, 1);
}
