//! Generate a small deterministic bank-marketing input file
//! (`sample_bank.csv`, sep=';') so the pipeline can be exercised without
//! the real UCI export.

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

    fn pick<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options[(self.next_u64() % options.len() as u64) as usize]
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

const JOBS: [&str; 12] = [
    "housemaid", "services", "admin.", "blue-collar", "technician", "retired",
    "management", "unemployed", "self-employed", "unknown", "entrepreneur", "student",
];
const MARITAL: [&str; 4] = ["married", "single", "divorced", "unknown"];
const EDUCATION: [&str; 8] = [
    "basic.4y", "high.school", "basic.6y", "basic.9y",
    "professional.course", "unknown", "university.degree", "illiterate",
];
const YES_NO_UNKNOWN: [&str; 3] = ["yes", "no", "unknown"];
const CONTACT: [&str; 2] = ["cellular", "telephone"];
const MONTHS: [&str; 10] = [
    "may", "jun", "jul", "aug", "oct", "nov", "dec", "mar", "apr", "sep",
];
const WEEKDAYS: [&str; 5] = ["mon", "tue", "wed", "thu", "fri"];
const POUTCOME: [&str; 3] = ["nonexistent", "failure", "success"];

fn main() {
    let mut rng = SimpleRng::new(42);
    let n_rows = 200;

    let output_path = "sample_bank.csv";
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(output_path)
        .expect("Failed to create output file");

    writer
        .write_record([
            "age", "job", "marital", "education", "default", "housing", "loan",
            "contact", "month", "day_of_week", "duration", "campaign", "pdays",
            "previous", "poutcome", "emp.var.rate", "cons.price.idx",
            "cons.conf.idx", "euribor3m", "nr.employed", "y",
        ])
        .expect("Failed to write header");

    for _ in 0..n_rows {
        let age = 18 + (rng.next_u64() % 70) as i64;
        let duration = (rng.next_u64() % 2000) as i64;
        let campaign = 1 + (rng.next_u64() % 10) as i64;
        // Most clients were never contacted before (pdays 999 sentinel).
        let pdays = if rng.next_f64() < 0.9 {
            999
        } else {
            (rng.next_u64() % 30) as i64
        };
        let previous = (rng.next_u64() % 5) as i64;
        let subscribed = if rng.next_f64() < 0.11 { "yes" } else { "no" };

        writer
            .write_record([
                age.to_string(),
                rng.pick(&JOBS).to_string(),
                rng.pick(&MARITAL).to_string(),
                rng.pick(&EDUCATION).to_string(),
                rng.pick(&YES_NO_UNKNOWN).to_string(),
                rng.pick(&YES_NO_UNKNOWN).to_string(),
                rng.pick(&YES_NO_UNKNOWN).to_string(),
                rng.pick(&CONTACT).to_string(),
                rng.pick(&MONTHS).to_string(),
                rng.pick(&WEEKDAYS).to_string(),
                duration.to_string(),
                campaign.to_string(),
                pdays.to_string(),
                previous.to_string(),
                rng.pick(&POUTCOME).to_string(),
                format!("{:.1}", rng.range(-3.4, 1.4)),
                format!("{:.3}", rng.range(92.2, 94.8)),
                format!("{:.1}", rng.range(-50.8, -26.9)),
                format!("{:.3}", rng.range(0.6, 5.1)),
                format!("{:.1}", rng.range(4963.6, 5228.1)),
                subscribed.to_string(),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {n_rows} records to {output_path}");
}
