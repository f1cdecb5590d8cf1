use crate::observability::labels::Labels;
use lazy_static::lazy_static;
use metrics::{counter, Counter};

const RESULT: &str = "result";

lazy_static! {
    pub static ref GLOBAL_STATS: Stats =
        Stats::new(&Labels::new(&[("validator", "brazilian_cnpj_checksum")]));
}

pub struct Stats {
    pub valid_identifiers: Counter,
    pub invalid_identifiers: Counter,

    // A base that passed the full-identifier shape check but was refused by the check
    // digit calculation. Counted as invalid too.
    pub check_digit_errors: Counter,
}

impl Stats {
    pub fn new(labels: &Labels) -> Self {
        Self {
            valid_identifiers: counter!("cnpj.validations", labels.with_label(RESULT, "valid")),
            invalid_identifiers: counter!(
                "cnpj.validations",
                labels.with_label(RESULT, "invalid")
            ),
            check_digit_errors: counter!("cnpj.check_digit_errors", labels.clone()),
        }
    }

    pub fn record_result(&self, is_valid: bool) {
        if is_valid {
            self.valid_identifiers.increment(1);
        } else {
            self.invalid_identifiers.increment(1);
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new(&Labels::empty())
    }
}
