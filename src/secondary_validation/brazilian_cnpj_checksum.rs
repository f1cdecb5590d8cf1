use crate::checksum::compute_check_digits;
use crate::normalization::normalize;
use crate::secondary_validation::Validator;
use crate::stats::{Stats, GLOBAL_STATS};
use crate::structure::{is_full_valid, CNPJ_BASE_LENGTH, CNPJ_LENGTH};

/// Full CNPJ check, masked (`XX.XXX.XXX/XXXX-XX`) or not, numeric or alphanumeric.
pub struct BrazilianCnpjChecksum;

impl Validator for BrazilianCnpjChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_Nacional_da_Pessoa_Jur%C3%ADdica
    fn is_valid_match(&self, regex_match: &str) -> bool {
        is_valid(regex_match)
    }
}

/// Returns true if `identifier` is a well-formed CNPJ whose check digits match its base.
///
/// Any input is accepted; malformed input is simply not valid.
pub fn is_valid(identifier: &str) -> bool {
    validate_and_record(identifier, &GLOBAL_STATS)
}

pub(crate) fn validate_and_record(identifier: &str, stats: &Stats) -> bool {
    let is_valid = validate(identifier, stats);
    stats.record_result(is_valid);
    is_valid
}

fn validate(identifier: &str, stats: &Stats) -> bool {
    let cnpj = normalize(identifier);

    if cnpj.len() != CNPJ_LENGTH || !is_full_valid(&cnpj) {
        return false;
    }

    // `is_full_valid` guarantees ASCII, so the split is on a char boundary
    let (base, actual_check_digits) = cnpj.split_at(CNPJ_BASE_LENGTH);

    match compute_check_digits(base) {
        Ok(expected_check_digits) => expected_check_digits == actual_check_digits,
        Err(_) => {
            // Reached by bases ending in `0` whose check digits don't, e.g. "12345678001086"
            stats.check_digit_errors.increment(1);
            false
        }
    }
}

#[cfg(test)]
mod test {
    use super::validate_and_record;
    use crate::secondary_validation::*;
    use crate::stats::Stats;
    use metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;

    #[test]
    fn test_valid_brazilian_cnpj_ids() {
        let valid_ids = vec![
            "12345678000195",
            "12.345.678/0001-95",
            "28UV8YY9000174",
            "28.UV8.YY9/0001-74",
            "12ABC34501DE35",
            "12.ABC.345/01DE-35",
            "33000167000101",
            // only a trailing `0` is refused, repeated digits are not
            "99999999999962",
            "  12.345.678/0001-95\n",
        ];
        for id in valid_ids {
            assert!(BrazilianCnpjChecksum.is_valid_match(id), "{id}");
        }
    }

    #[test]
    fn test_invalid_brazilian_cnpj_ids() {
        let invalid_ids = vec![
            // wrong checksum
            "12345678900111",
            "28.UV8.YY9/0001-70",
            "12.345.678/0001-59",
            // wrong length
            "",
            "1111111111111",
            "123456780001955",
            // lowercase
            "28uv8yy9000174",
            // correct check digits, but the identifier ends in `0`
            "ABCDEFGHIJKL80",
            "06048038000110",
            "11111111111180",
            // base ends in `0`
            "12345678001086",
            // whitespace inside
            "12 345 678 0001 95",
            // Non utf-8 characters 14 bytes
            "12345678901ñ5",
        ];
        for id in invalid_ids {
            assert!(!BrazilianCnpjChecksum.is_valid_match(id), "{id}");
        }
    }

    #[test]
    fn should_submit_validation_metrics() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let stats = Stats::default();
            assert!(validate_and_record("12.345.678/0001-95", &stats));
            assert!(validate_and_record("28UV8YY9000174", &stats));
            assert!(!validate_and_record("12345678900111", &stats));
            assert!(!validate_and_record("12345678001086", &stats));
        });

        let snapshot = snapshotter.snapshot().into_hashmap();

        let valid_key = Key::from_parts("cnpj.validations", vec![Label::new("result", "valid")]);
        let metric_value = snapshot
            .get(&CompositeKey::new(Counter, valid_key))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(2)));

        let invalid_key =
            Key::from_parts("cnpj.validations", vec![Label::new("result", "invalid")]);
        let metric_value = snapshot
            .get(&CompositeKey::new(Counter, invalid_key))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(2)));

        let metric_value = snapshot
            .get(&CompositeKey::new(
                Counter,
                Key::from_name("cnpj.check_digit_errors"),
            ))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));
    }

    #[test]
    fn changing_a_check_digit_invalidates() {
        let valid = "28UV8YY9000174";
        for position in [12, 13] {
            for digit in b'0'..=b'9' {
                let mut bytes = valid.as_bytes().to_vec();
                if bytes[position] == digit {
                    continue;
                }
                bytes[position] = digit;
                let mutated = String::from_utf8(bytes).unwrap();
                assert!(!is_valid(&mutated), "{mutated}");
            }
        }
    }

    #[test]
    fn formatting_characters_are_irrelevant() {
        let ids = vec!["12345678000195", "28UV8YY9000174", "12345678900111"];
        for id in ids {
            let expected = is_valid(id);
            for position in 0..=id.len() {
                for separator in ['.', '/', '-'] {
                    let mut formatted = id.to_string();
                    formatted.insert(position, separator);
                    assert_eq!(is_valid(&formatted), expected, "{formatted}");
                }
            }
        }
    }
}
