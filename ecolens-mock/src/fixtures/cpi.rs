// Annual consumer price inflation, percent.
pub const ROWS: &[(&str, f64)] = &[
    ("2014-01-01", 6.67),
    ("2015-01-01", 4.91),
    ("2016-01-01", 4.95),
    ("2017-01-01", 3.33),
    ("2018-01-01", 3.94),
    ("2019-01-01", 3.73),
    ("2020-01-01", 6.62),
    ("2021-01-01", 5.13),
    ("2022-01-01", 6.70),
    ("2023-01-01", 5.65),
];
