use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, Power, Torque},
    power::watt,
    torque::newton_meter,
};

/// Extension trait relating shaft power, torque, and rotational speed.
///
/// Uses the identity `ω = P / τ`. In imperial shop units this is the familiar
/// `rpm = hp · 5252 / (lbf·ft)`.
pub trait ShaftSpeed {
    /// Returns the rotational speed at which `self` is delivered with `torque`.
    fn speed_at(self, torque: Torque) -> AngularVelocity;
}

impl ShaftSpeed for Power {
    fn speed_at(self, torque: Torque) -> AngularVelocity {
        AngularVelocity::new::<radian_per_second>(
            self.get::<watt>() / torque.get::<newton_meter>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        angular_velocity::revolution_per_minute, power::horsepower, torque::pound_force_foot,
    };

    #[test]
    fn matches_imperial_rule_of_thumb() {
        let power = Power::new::<horsepower>(300.0);
        let torque = Torque::new::<pound_force_foot>(150.0);

        // 5252.113 is 33 000 / (2π), the exact form of the shop constant.
        assert_relative_eq!(
            power.speed_at(torque).get::<revolution_per_minute>(),
            300.0 * 5252.113 / 150.0,
            max_relative = 1e-6
        );
    }

    #[test]
    fn higher_torque_means_lower_speed() {
        let power = Power::new::<watt>(1.0e6);
        let slow = power.speed_at(Torque::new::<newton_meter>(2000.0));
        let fast = power.speed_at(Torque::new::<newton_meter>(500.0));

        assert!(slow < fast);
        assert_relative_eq!(fast.get::<radian_per_second>(), 2000.0);
    }
}
