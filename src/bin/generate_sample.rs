use serde::Serialize;

#[derive(Serialize)]
struct SampleRow {
    #[serde(rename = "Country")]
    country: &'static str,
    #[serde(rename = "Year")]
    year: i64,
    #[serde(rename = "IT_Specialists")]
    it_specialists: String,
    #[serde(rename = "IT_Export_Million_USD")]
    it_export_million_usd: String,
    #[serde(rename = "Startups")]
    startups: String,
    #[serde(rename = "Investments_Million_USD")]
    investments_million_usd: String,
}

/// Starting level in 2015 and yearly growth rate per metric.
struct CountryProfile {
    name: &'static str,
    specialists: (f64, f64),
    export: (f64, f64),
    startups: (f64, f64),
    investments: (f64, f64),
}

const PROFILES: [CountryProfile; 4] = [
    CountryProfile {
        name: "India",
        specialists: (3_900_000.0, 0.08),
        export: (108_000.0, 0.09),
        startups: (4_200.0, 0.12),
        investments: (9_000.0, 0.15),
    },
    CountryProfile {
        name: "Poland",
        specialists: (380_000.0, 0.05),
        export: (6_500.0, 0.11),
        startups: (2_700.0, 0.07),
        investments: (350.0, 0.14),
    },
    CountryProfile {
        name: "Israel",
        specialists: (290_000.0, 0.04),
        export: (16_000.0, 0.10),
        startups: (6_000.0, 0.05),
        investments: (4_400.0, 0.18),
    },
    CountryProfile {
        name: "Ukraine",
        specialists: (160_000.0, 0.09),
        export: (2_500.0, 0.17),
        startups: (1_100.0, 0.08),
        investments: (260.0, 0.16),
    },
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Multiplicative noise factor in `1 ± spread`.
    fn jitter(&mut self, spread: f64) -> f64 {
        1.0 + (self.next_f64() * 2.0 - 1.0) * spread
    }
}

fn grow(rng: &mut SimpleRng, (base, rate): (f64, f64), years: i32) -> f64 {
    base * (1.0 + rate).powi(years) * rng.jitter(0.05)
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let output_path = "sample_it_metrics.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    let mut rows = 0;
    for year in 2015..=2023 {
        for profile in &PROFILES {
            let elapsed = (year - 2015) as i32;
            let mut row = SampleRow {
                country: profile.name,
                year,
                it_specialists: format!("{:.0}", grow(&mut rng, profile.specialists, elapsed)),
                it_export_million_usd: format!("{:.1}", grow(&mut rng, profile.export, elapsed)),
                startups: format!("{:.0}", grow(&mut rng, profile.startups, elapsed)),
                investments_million_usd: format!(
                    "{:.1}",
                    grow(&mut rng, profile.investments, elapsed)
                ),
            };

            // A few unreported cells so the dashboard's missing-value path shows up.
            if profile.name == "Ukraine" && year == 2022 {
                row.investments_million_usd = "n/a".to_string();
            }
            if profile.name == "Israel" && year == 2016 {
                row.startups = String::new();
            }

            writer.serialize(&row).expect("Failed to write row");
            rows += 1;
        }
    }
    writer.flush().expect("Failed to flush output");

    println!("Wrote {rows} rows to {output_path}");
}
