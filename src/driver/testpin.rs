//! Trace pins for driver unit tests.
//!
//! A [`TracePin`] implements both the digital and PWM embedded-hal output
//! traits and records every write into a shared [`Trace`], so tests can
//! assert which pin received which write, and in what order.

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

/// One recorded pin write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinEvent {
    /// Logic high write.
    High,
    /// Logic low write.
    Low,
    /// Duty-cycle write.
    Duty(u16),
}

/// Shared write log for a set of trace pins.
#[derive(Clone, Default)]
pub struct Trace {
    events: Rc<RefCell<Vec<(&'static str, PinEvent)>>>,
}

impl Trace {
    /// Create a pin that records into this trace under the given name.
    pub fn pin(&self, name: &'static str) -> TracePin {
        TracePin {
            name,
            trace: self.clone(),
        }
    }

    /// Last event recorded for a pin, if any.
    pub fn last_for(&self, name: &str) -> Option<PinEvent> {
        self.events
            .borrow()
            .iter()
            .rev()
            .find(|(pin, _)| *pin == name)
            .map(|(_, event)| *event)
    }

    /// Total number of recorded events.
    pub fn count(&self) -> usize {
        self.events.borrow().len()
    }

    /// Drop all recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Take a copy of all recorded events in write order.
    pub fn take(&self) -> Vec<(&'static str, PinEvent)> {
        self.events.borrow().clone()
    }

    fn record(&self, name: &'static str, event: PinEvent) {
        self.events.borrow_mut().push((name, event));
    }
}

/// A named pin writing into a shared [`Trace`].
pub struct TracePin {
    name: &'static str,
    trace: Trace,
}

impl embedded_hal::digital::ErrorType for TracePin {
    type Error = core::convert::Infallible;
}

impl OutputPin for TracePin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.trace.record(self.name, PinEvent::High);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.trace.record(self.name, PinEvent::Low);
        Ok(())
    }
}

impl embedded_hal::pwm::ErrorType for TracePin {
    type Error = core::convert::Infallible;
}

impl SetDutyCycle for TracePin {
    fn max_duty_cycle(&self) -> u16 {
        255
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.trace.record(self.name, PinEvent::Duty(duty));
        Ok(())
    }
}
