extern crate num_bigint;
extern crate num_rational;
extern crate num_traits;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::str::FromStr;

const MAX_INT: u32 = (1 << 31) - 1;

fn best_r(raw_number: &str) -> Result<String, &'static str> {
    let mut number = if raw_number.contains('.') {
        let parts: Vec<&str> = raw_number.split('.').collect();
        let integer_part = parts[0];
        let decimal_part = parts[1];
        let len = decimal_part.len();

        let numerator = BigInt::from_str(&(integer_part.to_string() + decimal_part)).unwrap();
        let denominator = BigInt::from(10).pow((len as u64).try_into().unwrap());

        BigRational::new(numerator, denominator)
    } else {
        BigRational::from_str(raw_number).unwrap()
    };

    let mut fractions = vec![
        (BigInt::zero(), BigInt::one()),
        (BigInt::one(), BigInt::zero()),
    ];

    loop {
        if number.numer().clone() > MAX_INT.into() {
            break;
        }

        let a = number.to_integer();
        let f = &number - &a;
        let h = &a * &fractions[fractions.len() - 1].0 + &fractions[fractions.len() - 2].0;
        let k = &a * &fractions[fractions.len() - 1].1 + &fractions[fractions.len() - 2].1;

        if h > MAX_INT.into() || k > MAX_INT.into() {
            break;
        }

        fractions.push((h, k));

        if f == BigRational::zero() {
            break;
        }

        number = BigRational::one() / f;
    }

    let (n, d) = fractions.last().unwrap();

    if n.is_zero() || d.is_zero() {
        return Err("Couldn't find approximation");
    }

    Ok(format!("{},{}", n, d))
}

fn main() {
    match best_r("3.141592653589793238") {
        Ok(res) => println!("{}", res),
        Err(e) => println!("Error: {}", e),
    }
}
