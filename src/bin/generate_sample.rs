use std::fmt::Write as _;

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

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

/// Format with comma-grouped thousands, e.g. 1234567.8 → "1,234,567.8".
fn grouped(value: f64) -> String {
    let text = format!("{value:.1}");
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "0"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("{sign}{out}.{frac_part}")
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let mut report = String::new();

    let _ = writeln!(report, "Quarterly Fund Report");
    let _ = writeln!(report, "Prepared by: Investor Relations");
    let _ = writeln!(report, "Period: Q3 2024");
    let _ = writeln!(report);

    // Assets under management per period, in $M.
    let periods = ["AUM 2020", "AUM 2021", "AUM 2022", "AUM 2023", "AUM 2024"];
    let mut aum = rng.range(800.0, 1200.0);
    for period in &periods {
        let _ = writeln!(report, "{period}: ${}M", grouped(aum));
        aum *= 1.0 + rng.range(-0.05, 0.25);
    }

    // Portfolio split, in percent; one asset class deliberately at zero.
    let classes = ["Equity", "Fixed Income", "Real Estate", "Commodities"];
    let mut remaining = 100.0;
    for class in &classes[..classes.len() - 1] {
        let share = (rng.range(0.2, 0.6) * remaining * 10.0).round() / 10.0;
        remaining -= share;
        let _ = writeln!(report, "{class} allocation: {share:.1}% of portfolio");
    }
    let _ = writeln!(report, "{} allocation: {remaining:.1}%", classes[classes.len() - 1]);
    let _ = writeln!(report, "Derivatives allocation: 0%");

    let _ = writeln!(report, "Net flows: -{}M after redemptions", grouped(rng.range(5.0, 40.0)));
    let _ = writeln!(report, "Outlook: cautiously optimistic");
    let _ = writeln!(report, "Risk rating: moderate");
    // Restated figure; the later line replaces the earlier one.
    let _ = writeln!(report, "Expense ratio: 0.{}%", 40 + rng.next_u64() % 20);

    let output_path = "sample_report.txt";
    if let Err(e) = std::fs::write(output_path, &report) {
        eprintln!("Failed to write {output_path}: {e}");
        std::process::exit(1);
    }

    println!(
        "Wrote {} lines to {output_path}",
        report.lines().count()
    );
}
