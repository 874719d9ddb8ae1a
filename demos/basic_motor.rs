//! Basic motor control example.
//!
//! Demonstrates building a two-pin PWM driver by hand and driving it in
//! both decay modes.
//!
//! This example uses mock pins so it runs without real hardware.

use dc_motor_drive::{ChipKind, Decay, MotorDriver, TwoPinPwmBuilder};

/// Mock pin for demonstration.
struct MockPin {
    duty: u16,
    high: bool,
}

impl MockPin {
    fn new() -> Self {
        Self {
            duty: 0,
            high: false,
        }
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }
}

impl embedded_hal::pwm::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::pwm::SetDutyCycle for MockPin {
    fn max_duty_cycle(&self) -> u16 {
        255
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty = duty;
        Ok(())
    }
}

fn main() {
    println!("=== Basic Motor Control Example ===\n");

    // Build a DRV8837-wired motor with mock pins
    let mut motor = TwoPinPwmBuilder::new()
        .name("demo_motor")
        .pin_a(MockPin::new())
        .pin_c(MockPin::new())
        .enable_pin(MockPin::new())
        .chip(ChipKind::Drv8837)
        .build()
        .expect("Failed to build motor");

    println!("Motor created: {} ({})", motor.name(), motor.chip());
    println!("Enabled: {}", motor.is_enabled());

    // Drive forward at half scale with brake decay
    motor.write(128).expect("drive failed");
    println!("After write(128): read() = {}", motor.read());

    // Reverse with coast decay
    motor.set_default_decay(Decay::Coast);
    motor.write(-128).expect("drive failed");
    println!("After coast write(-128): read() = {}", motor.read());

    // Out-of-range values saturate
    motor.brake_to(10_000).expect("drive failed");
    println!("After brake_to(10000): read() = {}", motor.read());

    // Mirror the motor and drive again
    motor.set_mirror(true);
    motor.write(100).expect("drive failed");
    println!("Mirrored write(100): read() = {}", motor.read());

    // Disabled motors ignore drive calls
    motor.disable().expect("disable failed");
    motor.write(42).expect("drive failed");
    println!("Disabled write(42): read() = {}", motor.read());
}
