use num_integer::Integer;

/// Computes the greatest common divisor of two numbers. The result is never negative.
pub fn gcd(a: i64, b: i64) -> i64 {
    a.gcd(&b)
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b).
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let egcd = a.extended_gcd(&b);
    (egcd.gcd, egcd.x, egcd.y)
}

/// `true` when `a` is a unit of Z_m, i.e. gcd(a, m) == 1.
pub fn is_coprime(a: i64, m: i64) -> bool {
    gcd(a.rem_euclid(m), m) == 1
}
