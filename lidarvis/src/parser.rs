use crate::*;

use std::num::IntErrorKind;

/// parse one `distance,angle,quality` line
///
/// Surrounding whitespace of each field is ignored, so a trailing `\r` from
/// the sensor does not matter.
pub fn parse(line: &str) -> Result<Reading, Error> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(Error::malformed(line, Malformed::FieldCount(fields.len())));
    }

    let mut values = [0i64; 3];
    for (i, (field, value)) in fields.iter().zip(values.iter_mut()).enumerate() {
        *value = parse_int(field.trim())
            .ok_or_else(|| Error::malformed(line, Malformed::NotAnInteger(i)))?;
    }

    let reading = Reading {
        distance: values[0],
        angle: values[1],
        quality: values[2],
    };
    log::info!(
        "Distance: {}, Angle: {}, Quality: {}",
        reading.distance,
        reading.angle,
        reading.quality
    );

    Ok(reading)
}

/// integers outside the i64 range saturate, the mapper clamps them anyway
fn parse_int(field: &str) -> Option<i64> {
    match field.parse::<i64>() {
        Ok(v) => Some(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(line: &str) -> Malformed {
        match parse(line) {
            Err(Error::MalformedReading { reason, .. }) => reason,
            other => panic!("{:?} parsed as {:?}", line, other),
        }
    }

    #[test]
    fn valid() {
        assert_eq!(
            parse("500,1,15").unwrap(),
            Reading {
                distance: 500,
                angle: 1,
                quality: 15
            }
        );
        assert_eq!(
            parse(" 106, 0 ,10\r").unwrap(),
            Reading {
                distance: 106,
                angle: 0,
                quality: 10
            }
        );
        assert_eq!(parse("-5,-90,0").unwrap().angle, -90);
    }

    #[test]
    fn out_of_range_saturates() {
        let reading = parse("99999999999999999999,0,10").unwrap();
        assert_eq!(reading.distance, i64::MAX);
        assert_eq!(reading.quality, 10);

        assert_eq!(parse("1,-99999999999999999999,0").unwrap().angle, i64::MIN);
        assert_eq!(reason("99999999999999999999x,0,10"), Malformed::NotAnInteger(0));
    }

    #[test]
    fn field_count() {
        assert_eq!(reason("500,1"), Malformed::FieldCount(2));
        assert_eq!(reason("500,1,15,3"), Malformed::FieldCount(4));
        assert_eq!(reason(""), Malformed::FieldCount(1));
    }

    #[test]
    fn not_integers() {
        assert_eq!(reason("a,b,c"), Malformed::NotAnInteger(0));
        assert_eq!(reason("500,1.5,15"), Malformed::NotAnInteger(1));
        assert_eq!(reason("500,1,"), Malformed::NotAnInteger(2));
    }

    #[test]
    fn error_keeps_line() {
        match parse("a,b,c") {
            Err(Error::MalformedReading { line, .. }) => assert_eq!(line, "a,b,c"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
