//! Configuration-driven example.
//!
//! Parses a TOML motor description and binds mock pins through the
//! `MotorSystem` facade.

use dc_motor_drive::{config::parse_config, MotorDriver, MotorSystem};

const CONFIG: &str = r#"
[motors.left_wheel]
name = "Left Wheel"
chip = "drv8837"

[motors.left_wheel.pins]
a = 3
c = 5
enable = 7

[motors.right_wheel]
name = "Right Wheel"
chip = "drv8837"
mirrored = true

[motors.right_wheel.pins]
a = 6
c = 9
enable = 8

[motors.lift]
name = "Lift"
chip = "vnh5019"
default_decay = "coast"

[motors.lift.pins]
a = 10
c = 11
pwm = 12
enable = 13
"#;

/// Mock pin for demonstration.
struct MockPin;

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
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

    fn set_duty_cycle(&mut self, _duty: u16) -> Result<(), Self::Error> {
        Ok(())
    }
}

fn main() {
    println!("=== Config-Driven Motor Example ===\n");

    let config = parse_config(CONFIG).expect("Failed to parse config");
    let mut system = MotorSystem::from_config(config);

    println!("Configured motors:");
    let names: Vec<String> = system.motor_names().map(str::to_owned).collect();
    for name in &names {
        let topology = system.topology(name).unwrap();
        println!("  {} ({})", name, topology);
    }
    println!();

    // Bind the two wheels
    let mut left = system
        .register_two_pin("left_wheel", MockPin, MockPin, MockPin)
        .expect("Failed to build left wheel");
    let mut right = system
        .register_two_pin("right_wheel", MockPin, MockPin, MockPin)
        .expect("Failed to build right wheel");

    // The right wheel is mirrored in config, so the same command drives
    // both wheels in the same physical direction.
    left.write(150).expect("drive failed");
    right.write(150).expect("drive failed");
    println!("left.read()  = {:>4}", left.read());
    println!("right.read() = {:>4}", right.read());

    // Bind the four-wire lift and park it
    let mut lift = system
        .register_four_wire("lift", MockPin, MockPin, MockPin, MockPin)
        .expect("Failed to build lift");
    lift.write(80).expect("drive failed");
    lift.disable().expect("disable failed");
    println!("lift disabled, read() = {}", lift.read());

    println!("\n{} motors registered", system.registered_count());
}
