//! Built-in motor catalog.
//!
//! Rated figures are manufacturer data sheet values. Efficiency is a
//! percentage where published and `1.0` otherwise; cost is zero where unknown.

use super::{MotorRecord, Tag};

/// Every motor in the built-in catalog, in curation order.
pub(super) static RECORDS: &[MotorRecord] = &[
    MotorRecord {
        name: "Brusa HSM1-10.18.04",
        rated_power_kw: 31.0,
        max_power_kw: 56.0,
        rated_rpm: 7500.0,
        max_rpm: 13000.0,
        gear_ratio: 1.0,
        rated_torque_nm: 52.0,
        max_torque_nm: 105.0,
        voltage: 400.0,
        weight_kg: 25.0,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Auto,
            Tag::InRunner,
            Tag::Radial,
            Tag::LiquidCool,
            Tag::Commercial,
            Tag::Brusa,
        ],
    },
    MotorRecord {
        name: "BMW i3 EMP242",
        rated_power_kw: 125.0,
        max_power_kw: 125.0,
        rated_rpm: 4700.0,
        max_rpm: 5000.0,
        gear_ratio: 3.0,
        rated_torque_nm: 250.0,
        max_torque_nm: 250.0,
        voltage: 355.0,
        weight_kg: 41.0,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Auto,
            Tag::InRunner,
            Tag::Radial,
            Tag::LiquidCool,
            Tag::Commercial,
            Tag::Bmw,
        ],
    },
    MotorRecord {
        name: "EMRAX 188-HB-AC",
        rated_power_kw: 28.0,
        max_power_kw: 70.0,
        rated_rpm: 3000.0,
        max_rpm: 7000.0,
        gear_ratio: 1.0,
        rated_torque_nm: 89.0,
        max_torque_nm: 100.0,
        voltage: 400.0,
        weight_kg: 6.8,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Axial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::Emrax,
        ],
    },
    MotorRecord {
        name: "EMRAX 208-HB-AC",
        rated_power_kw: 32.0,
        max_power_kw: 80.0,
        rated_rpm: 3000.0,
        max_rpm: 5000.0,
        gear_ratio: 1.0,
        rated_torque_nm: 120.0,
        max_torque_nm: 150.0,
        voltage: 470.0,
        weight_kg: 9.1,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Axial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::Emrax,
        ],
    },
    MotorRecord {
        name: "EMRAX 228-HB-AC",
        rated_power_kw: 42.0,
        max_power_kw: 100.0,
        rated_rpm: 3000.0,
        max_rpm: 5000.0,
        gear_ratio: 1.0,
        rated_torque_nm: 134.0,
        max_torque_nm: 240.0,
        voltage: 670.0,
        weight_kg: 12.0,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Axial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::Emrax,
        ],
    },
    MotorRecord {
        name: "EMRAX 268-LV-AC",
        rated_power_kw: 75.0,
        max_power_kw: 115.0,
        rated_rpm: 2000.0,
        max_rpm: 4000.0,
        gear_ratio: 1.0,
        rated_torque_nm: 250.0,
        max_torque_nm: 500.0,
        voltage: 700.0,
        weight_kg: 19.9,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Axial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::Emrax,
        ],
    },
    MotorRecord {
        name: "EMRAX 348-LV-AC",
        rated_power_kw: 170.0,
        max_power_kw: 330.0,
        rated_rpm: 4000.0,
        max_rpm: 4000.0,
        gear_ratio: 1.0,
        rated_torque_nm: 406.0,
        max_torque_nm: 1000.0,
        voltage: 340.0,
        weight_kg: 39.0,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Axial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::Emrax,
        ],
    },
    MotorRecord {
        name: "EMRAX 348-LV-CC",
        rated_power_kw: 200.0,
        max_power_kw: 330.0,
        rated_rpm: 1800.0,
        max_rpm: 4000.0,
        gear_ratio: 1.0,
        rated_torque_nm: 500.0,
        max_torque_nm: 1000.0,
        voltage: 340.0,
        weight_kg: 40.0,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Axial,
            Tag::LiquidCool,
            Tag::Commercial,
            Tag::Emrax,
        ],
    },
    MotorRecord {
        name: "EMRAX 188-LV-CC",
        rated_power_kw: 35.0,
        max_power_kw: 70.0,
        rated_rpm: 3000.0,
        max_rpm: 7000.0,
        gear_ratio: 1.0,
        rated_torque_nm: 50.0,
        max_torque_nm: 100.0,
        voltage: 100.0,
        weight_kg: 7.0,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Axial,
            Tag::LiquidCool,
            Tag::Commercial,
            Tag::Emrax,
        ],
    },
    MotorRecord {
        name: "EMRAX 208-LV-CC",
        rated_power_kw: 40.0,
        max_power_kw: 80.0,
        rated_rpm: 3000.0,
        max_rpm: 6000.0,
        gear_ratio: 1.0,
        rated_torque_nm: 80.0,
        max_torque_nm: 150.0,
        voltage: 125.0,
        weight_kg: 9.3,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Axial,
            Tag::LiquidCool,
            Tag::Commercial,
            Tag::Emrax,
        ],
    },
    MotorRecord {
        name: "EMRAX 228-LV-CC",
        rated_power_kw: 55.0,
        max_power_kw: 100.0,
        rated_rpm: 3000.0,
        max_rpm: 5500.0,
        gear_ratio: 1.0,
        rated_torque_nm: 125.0,
        max_torque_nm: 240.0,
        voltage: 130.0,
        weight_kg: 12.3,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Axial,
            Tag::LiquidCool,
            Tag::Commercial,
            Tag::Emrax,
        ],
    },
    MotorRecord {
        name: "EMRAX 268-LV-LC",
        rated_power_kw: 80.0,
        max_power_kw: 115.0,
        rated_rpm: 2300.0,
        max_rpm: 4500.0,
        gear_ratio: 1.0,
        rated_torque_nm: 250.0,
        max_torque_nm: 500.0,
        voltage: 130.0,
        weight_kg: 20.3,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Axial,
            Tag::LiquidCool,
            Tag::Commercial,
            Tag::Emrax,
        ],
    },
    MotorRecord {
        name: "EMRAX 348",
        rated_power_kw: 168.0,
        max_power_kw: 168.0,
        rated_rpm: 3200.0,
        max_rpm: 3200.0,
        gear_ratio: 1.0,
        rated_torque_nm: 500.0,
        max_torque_nm: 500.0,
        voltage: 340.0,
        weight_kg: 40.0,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Axial,
            Tag::LiquidCool,
            Tag::Commercial,
            Tag::Emrax,
        ],
    },
    MotorRecord {
        name: "Joby JM1",
        rated_power_kw: 13.0,
        max_power_kw: 20.0,
        rated_rpm: 6000.0,
        max_rpm: 9000.0,
        gear_ratio: 1.0,
        rated_torque_nm: 21.0,
        max_torque_nm: 32.0,
        voltage: 40.0,
        weight_kg: 2.7,
        efficiency_pct: 1.0,
        cost: 6000.0,
        tags: &[
            Tag::Aero,
            Tag::InRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::Joby,
        ],
    },
    MotorRecord {
        name: "Joby JM1S",
        rated_power_kw: 8.0,
        max_power_kw: 13.0,
        rated_rpm: 6000.0,
        max_rpm: 9000.0,
        gear_ratio: 1.0,
        rated_torque_nm: 13.0,
        max_torque_nm: 20.0,
        voltage: 45.0,
        weight_kg: 1.8,
        efficiency_pct: 1.0,
        cost: 6000.0,
        tags: &[
            Tag::Aero,
            Tag::InRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::Joby,
        ],
    },
    MotorRecord {
        name: "Joby JM2",
        rated_power_kw: 14.0,
        max_power_kw: 21.0,
        rated_rpm: 2500.0,
        max_rpm: 3500.0,
        gear_ratio: 1.0,
        rated_torque_nm: 53.0,
        max_torque_nm: 80.0,
        voltage: 100.0,
        weight_kg: 4.0,
        efficiency_pct: 1.0,
        cost: 6000.0,
        tags: &[
            Tag::Aero,
            Tag::InRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::Joby,
        ],
    },
    MotorRecord {
        name: "Joby JM2S",
        rated_power_kw: 11.0,
        max_power_kw: 16.0,
        rated_rpm: 2500.0,
        max_rpm: 3500.0,
        gear_ratio: 1.0,
        rated_torque_nm: 40.0,
        max_torque_nm: 60.0,
        voltage: 50.0,
        weight_kg: 3.3,
        efficiency_pct: 1.0,
        cost: 6000.0,
        tags: &[
            Tag::Aero,
            Tag::InRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::Joby,
        ],
    },
    MotorRecord {
        name: "Joby JMx57",
        rated_power_kw: 60.0,
        max_power_kw: 72.0,
        rated_rpm: 2250.0,
        max_rpm: 3500.0,
        gear_ratio: 1.0,
        rated_torque_nm: 255.0,
        max_torque_nm: 400.0,
        voltage: 400.0,
        weight_kg: 26.3,
        efficiency_pct: 1.0,
        cost: 6000.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Development,
            Tag::Joby,
        ],
    },
    MotorRecord {
        name: "Launchpoint 7.5\" DHA-075-6-75-1-4T3PY Housed",
        rated_power_kw: 6.0,
        max_power_kw: 10.0,
        rated_rpm: 6000.0,
        max_rpm: 7000.0,
        gear_ratio: 1.0,
        rated_torque_nm: 10.0,
        max_torque_nm: 13.0,
        voltage: 270.0,
        weight_kg: 1.5,
        efficiency_pct: 1.0,
        cost: 15000.0,
        tags: &[
            Tag::Aero,
            Tag::Dual,
            Tag::Axial,
            Tag::AirCool,
            Tag::Development,
            Tag::Launchpoint,
        ],
    },
    MotorRecord {
        name: "Launchpoint 12\" Direct Drive",
        rated_power_kw: 10.0,
        max_power_kw: 20.0,
        rated_rpm: 1500.0,
        max_rpm: 3000.0,
        gear_ratio: 1.0,
        rated_torque_nm: 64.0,
        max_torque_nm: 64.0,
        voltage: 270.0,
        weight_kg: 7.0,
        efficiency_pct: 1.0,
        cost: 25000.0,
        tags: &[
            Tag::Aero,
            Tag::Dual,
            Tag::Axial,
            Tag::AirCool,
            Tag::Development,
            Tag::Launchpoint,
        ],
    },
    MotorRecord {
        name: "Launchpoint 5kw",
        rated_power_kw: 5.0,
        max_power_kw: 5.0,
        rated_rpm: 8400.0,
        max_rpm: 8400.0,
        gear_ratio: 1.0,
        rated_torque_nm: 6.0,
        max_torque_nm: 6.0,
        voltage: 0.0,
        weight_kg: 0.7,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::Dual,
            Tag::Axial,
            Tag::AirCool,
            Tag::Development,
            Tag::Launchpoint,
        ],
    },
    MotorRecord {
        name: "Launchpoint 16kw",
        rated_power_kw: 16.0,
        max_power_kw: 16.0,
        rated_rpm: 12000.0,
        max_rpm: 12000.0,
        gear_ratio: 1.0,
        rated_torque_nm: 13.0,
        max_torque_nm: 13.0,
        voltage: 0.0,
        weight_kg: 1.5,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::Dual,
            Tag::Axial,
            Tag::AirCool,
            Tag::Development,
            Tag::Launchpoint,
        ],
    },
    MotorRecord {
        name: "Launchpoint 82kw",
        rated_power_kw: 82.0,
        max_power_kw: 82.0,
        rated_rpm: 6200.0,
        max_rpm: 6200.0,
        gear_ratio: 1.0,
        rated_torque_nm: 126.0,
        max_torque_nm: 126.0,
        voltage: 0.0,
        weight_kg: 12.7,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::Dual,
            Tag::Axial,
            Tag::AirCool,
            Tag::Development,
            Tag::Launchpoint,
        ],
    },
    MotorRecord {
        name: "Magicall MaGiDRIVE 12",
        rated_power_kw: 10.0,
        max_power_kw: 12.0,
        rated_rpm: 7000.0,
        max_rpm: 7000.0,
        gear_ratio: 1.0,
        rated_torque_nm: 25.0,
        max_torque_nm: 25.0,
        voltage: 24.0,
        weight_kg: 2.8,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::InRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::Magicall,
        ],
    },
    MotorRecord {
        name: "Magicall MaGiDRIVE 20",
        rated_power_kw: 16.0,
        max_power_kw: 20.0,
        rated_rpm: 6200.0,
        max_rpm: 6200.0,
        gear_ratio: 1.0,
        rated_torque_nm: 50.0,
        max_torque_nm: 50.0,
        voltage: 24.0,
        weight_kg: 4.8,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::InRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::Magicall,
        ],
    },
    MotorRecord {
        name: "Magicall MaGiDRIVE 40",
        rated_power_kw: 32.0,
        max_power_kw: 40.0,
        rated_rpm: 5500.0,
        max_rpm: 5500.0,
        gear_ratio: 1.0,
        rated_torque_nm: 100.0,
        max_torque_nm: 100.0,
        voltage: 24.0,
        weight_kg: 8.9,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::InRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::Magicall,
        ],
    },
    MotorRecord {
        name: "Magicall MaGiDRIVE 75",
        rated_power_kw: 60.0,
        max_power_kw: 75.0,
        rated_rpm: 5000.0,
        max_rpm: 5000.0,
        gear_ratio: 1.0,
        rated_torque_nm: 225.0,
        max_torque_nm: 225.0,
        voltage: 24.0,
        weight_kg: 16.5,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::InRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::Magicall,
        ],
    },
    MotorRecord {
        name: "Magicall MaGiDRIVE 150",
        rated_power_kw: 120.0,
        max_power_kw: 150.0,
        rated_rpm: 4200.0,
        max_rpm: 4200.0,
        gear_ratio: 1.0,
        rated_torque_nm: 500.0,
        max_torque_nm: 500.0,
        voltage: 24.0,
        weight_kg: 29.7,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::InRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::Magicall,
        ],
    },
    MotorRecord {
        name: "Magicall MaGiDRIVE 300",
        rated_power_kw: 240.0,
        max_power_kw: 300.0,
        rated_rpm: 3600.0,
        max_rpm: 3600.0,
        gear_ratio: 1.0,
        rated_torque_nm: 1000.0,
        max_torque_nm: 1000.0,
        voltage: 24.0,
        weight_kg: 49.5,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::InRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::Magicall,
        ],
    },
    MotorRecord {
        name: "MagniX Magni5",
        rated_power_kw: 265.0,
        max_power_kw: 265.0,
        rated_rpm: 2500.0,
        max_rpm: 2500.0,
        gear_ratio: 1.0,
        rated_torque_nm: 1012.0,
        max_torque_nm: 1012.0,
        voltage: 24.0,
        weight_kg: 53.0,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::InRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::MagniX,
        ],
    },
    MotorRecord {
        name: "MagniX Magni250",
        rated_power_kw: 280.0,
        max_power_kw: 280.0,
        rated_rpm: 1900.0,
        max_rpm: 1900.0,
        gear_ratio: 1.0,
        rated_torque_nm: 1407.0,
        max_torque_nm: 1407.0,
        voltage: 540.0,
        weight_kg: 60.0,
        efficiency_pct: 93.8,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::InRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::MagniX,
        ],
    },
    MotorRecord {
        name: "MagniX Magni500",
        rated_power_kw: 560.0,
        max_power_kw: 560.0,
        rated_rpm: 1900.0,
        max_rpm: 1900.0,
        gear_ratio: 1.0,
        rated_torque_nm: 2814.0,
        max_torque_nm: 2814.0,
        voltage: 540.0,
        weight_kg: 120.0,
        efficiency_pct: 93.8,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::InRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::MagniX,
        ],
    },
    MotorRecord {
        name: "Magnax AXF225",
        rated_power_kw: 170.0,
        max_power_kw: 170.0,
        rated_rpm: 6500.0,
        max_rpm: 6500.0,
        gear_ratio: 1.0,
        rated_torque_nm: 250.0,
        max_torque_nm: 250.0,
        voltage: 0.0,
        weight_kg: 14.0,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::Axial,
            Tag::LiquidCool,
            Tag::Commercial,
            Tag::Magnax,
        ],
    },
    MotorRecord {
        name: "McLaren Emotor",
        rated_power_kw: 110.0,
        max_power_kw: 120.0,
        rated_rpm: 17000.0,
        max_rpm: 17000.0,
        gear_ratio: 9.0,
        rated_torque_nm: 105.0,
        max_torque_nm: 130.0,
        voltage: 0.0,
        weight_kg: 26.0,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Auto,
            Tag::InRunner,
            Tag::Radial,
            Tag::LiquidCool,
            Tag::Commercial,
            Tag::McLaren,
        ],
    },
    MotorRecord {
        name: "NeuMotor8038/LV (66v)",
        rated_power_kw: 15.0,
        max_power_kw: 20.0,
        rated_rpm: 6000.0,
        max_rpm: 8000.0,
        gear_ratio: 1.0,
        rated_torque_nm: 24.0,
        max_torque_nm: 24.0,
        voltage: 66.6,
        weight_kg: 2.0,
        efficiency_pct: 1.0,
        cost: 329.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::NeuMotor,
        ],
    },
    MotorRecord {
        name: "NeuMotor8038/HV (270v)",
        rated_power_kw: 15.0,
        max_power_kw: 20.0,
        rated_rpm: 6000.0,
        max_rpm: 8000.0,
        gear_ratio: 1.0,
        rated_torque_nm: 24.0,
        max_torque_nm: 24.0,
        voltage: 270.0,
        weight_kg: 2.0,
        efficiency_pct: 1.0,
        cost: 329.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::NeuMotor,
        ],
    },
    MotorRecord {
        name: "Rotex REX30",
        rated_power_kw: 15.0,
        max_power_kw: 18.0,
        rated_rpm: 2700.0,
        max_rpm: 2700.0,
        gear_ratio: 1.0,
        rated_torque_nm: 53.0,
        max_torque_nm: 53.0,
        voltage: 63.0,
        weight_kg: 5.2,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::Rotex,
        ],
    },
    MotorRecord {
        name: "Rotex REX90",
        rated_power_kw: 50.0,
        max_power_kw: 60.0,
        rated_rpm: 2200.0,
        max_rpm: 2200.0,
        gear_ratio: 1.0,
        rated_torque_nm: 217.0,
        max_torque_nm: 217.0,
        voltage: 380.0,
        weight_kg: 17.0,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::Rotex,
        ],
    },
    MotorRecord {
        name: "Siemens SP200D",
        rated_power_kw: 204.0,
        max_power_kw: 204.0,
        rated_rpm: 1300.0,
        max_rpm: 1300.0,
        gear_ratio: 1.0,
        rated_torque_nm: 1450.0,
        max_torque_nm: 1450.0,
        voltage: 580.0,
        weight_kg: 49.0,
        efficiency_pct: 95.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Radial,
            Tag::LiquidCool,
            Tag::Commercial,
            Tag::Siemens,
        ],
    },
    MotorRecord {
        name: "Siemens SP260D",
        rated_power_kw: 260.0,
        max_power_kw: 370.0,
        rated_rpm: 2500.0,
        max_rpm: 3500.0,
        gear_ratio: 1.0,
        rated_torque_nm: 993.0,
        max_torque_nm: 1009.0,
        voltage: 580.0,
        weight_kg: 50.2,
        efficiency_pct: 95.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Radial,
            Tag::LiquidCool,
            Tag::Commercial,
            Tag::Siemens,
        ],
    },
    MotorRecord {
        name: "ThinGap 10\" Dev TGD-260Y083B23",
        rated_power_kw: 13.0,
        max_power_kw: 15.0,
        rated_rpm: 1400.0,
        max_rpm: 2000.0,
        gear_ratio: 1.0,
        rated_torque_nm: 72.0,
        max_torque_nm: 89.0,
        voltage: 100.0,
        weight_kg: 5.6,
        efficiency_pct: 1.0,
        cost: 17869.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Development,
            Tag::ThinGap,
        ],
    },
    MotorRecord {
        name: "ThinGap 10\" Prod TGD-260Y083A231",
        rated_power_kw: 13.0,
        max_power_kw: 20.0,
        rated_rpm: 2500.0,
        max_rpm: 2500.0,
        gear_ratio: 1.0,
        rated_torque_nm: 50.0,
        max_torque_nm: 76.0,
        voltage: 100.0,
        weight_kg: 6.2,
        efficiency_pct: 1.0,
        cost: 15860.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::ThinGap,
        ],
    },
    MotorRecord {
        name: "ThinGap 10\" Carbon Fiber",
        rated_power_kw: 13.0,
        max_power_kw: 40.0,
        rated_rpm: 2500.0,
        max_rpm: 2500.0,
        gear_ratio: 1.0,
        rated_torque_nm: 50.0,
        max_torque_nm: 153.0,
        voltage: 270.0,
        weight_kg: 6.2,
        efficiency_pct: 1.0,
        cost: 15860.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Commercial,
            Tag::ThinGap,
        ],
    },
    MotorRecord {
        name: "ThinGap 15\" CF TGD-386Y045A356-H",
        rated_power_kw: 14.6,
        max_power_kw: 20.0,
        rated_rpm: 9000.0,
        max_rpm: 9000.0,
        gear_ratio: 1.0,
        rated_torque_nm: 15.0,
        max_torque_nm: 23.6,
        voltage: 42.4,
        weight_kg: 2.0,
        efficiency_pct: 1.0,
        cost: 27000.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Development,
            Tag::ThinGap,
        ],
    },
    MotorRecord {
        name: "ThinGap Aurora Canard PF1.0",
        rated_power_kw: 107.0,
        max_power_kw: 114.0,
        rated_rpm: 7600.0,
        max_rpm: 7600.0,
        gear_ratio: 1.0,
        rated_torque_nm: 134.0,
        max_torque_nm: 143.0,
        voltage: 235.0,
        weight_kg: 11.3,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Development,
            Tag::ThinGap,
        ],
    },
    MotorRecord {
        name: "ThinGap Aurora Canard PF0.9",
        rated_power_kw: 96.0,
        max_power_kw: 103.0,
        rated_rpm: 7600.0,
        max_rpm: 7600.0,
        gear_ratio: 1.0,
        rated_torque_nm: 121.0,
        max_torque_nm: 129.0,
        voltage: 235.0,
        weight_kg: 11.3,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Development,
            Tag::ThinGap,
        ],
    },
    MotorRecord {
        name: "ThinGap Aurora Wing PF1.0",
        rated_power_kw: 141.0,
        max_power_kw: 194.0,
        rated_rpm: 5848.0,
        max_rpm: 5848.0,
        gear_ratio: 1.0,
        rated_torque_nm: 229.0,
        max_torque_nm: 317.0,
        voltage: 233.0,
        weight_kg: 17.9,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Development,
            Tag::ThinGap,
        ],
    },
    MotorRecord {
        name: "ThinGap Aurora Wing PF0.9",
        rated_power_kw: 127.0,
        max_power_kw: 175.0,
        rated_rpm: 5848.0,
        max_rpm: 5848.0,
        gear_ratio: 1.0,
        rated_torque_nm: 207.0,
        max_torque_nm: 286.0,
        voltage: 233.0,
        weight_kg: 17.9,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Aero,
            Tag::OutRunner,
            Tag::Radial,
            Tag::AirCool,
            Tag::Development,
            Tag::ThinGap,
        ],
    },
    MotorRecord {
        name: "UQM HD250",
        rated_power_kw: 150.0,
        max_power_kw: 250.0,
        rated_rpm: 5500.0,
        max_rpm: 5500.0,
        gear_ratio: 1.0,
        rated_torque_nm: 360.0,
        max_torque_nm: 900.0,
        voltage: 450.0,
        weight_kg: 85.0,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Auto,
            Tag::OutRunner,
            Tag::Radial,
            Tag::LiquidCool,
            Tag::Commercial,
            Tag::Uqm,
        ],
    },
    MotorRecord {
        name: "YASA P400",
        rated_power_kw: 60.0,
        max_power_kw: 160.0,
        rated_rpm: 2250.0,
        max_rpm: 8000.0,
        gear_ratio: 1.0,
        rated_torque_nm: 255.0,
        max_torque_nm: 370.0,
        voltage: 0.0,
        weight_kg: 23.6,
        efficiency_pct: 1.0,
        cost: 0.0,
        tags: &[
            Tag::Auto,
            Tag::OutRunner,
            Tag::Radial,
            Tag::LiquidCool,
            Tag::Commercial,
            Tag::Yasa,
        ],
    },
];
