// Monthly USD/INR reference rate.
pub const ROWS: &[(&str, f64)] = &[
    ("2019-01-01", 69.36), ("2019-02-01", 70.09), ("2019-03-01", 70.46),
    ("2019-04-01", 70.52), ("2019-05-01", 70.92), ("2019-06-01", 71.33),
    ("2019-07-01", 71.95), ("2019-08-01", 72.01), ("2019-09-01", 72.66),
    ("2019-10-01", 72.82), ("2019-11-01", 73.29), ("2019-12-01", 73.31),
    ("2020-01-01", 72.81), ("2020-02-01", 72.98), ("2020-03-01", 72.9),
    ("2020-04-01", 73.26), ("2020-05-01", 73.18), ("2020-06-01", 72.79),
    ("2020-07-01", 73.29), ("2020-08-01", 73.03), ("2020-09-01", 73.2),
    ("2020-10-01", 73.57), ("2020-11-01", 73.26), ("2020-12-01", 73.67),
    ("2021-01-01", 74.06), ("2021-02-01", 74.54), ("2021-03-01", 74.41),
    ("2021-04-01", 74.56), ("2021-05-01", 74.88), ("2021-06-01", 75.89),
    ("2021-07-01", 76.43), ("2021-08-01", 76.75), ("2021-09-01", 77.13),
    ("2021-10-01", 77.81), ("2021-11-01", 77.97), ("2021-12-01", 78.06),
    ("2022-01-01", 78.93), ("2022-02-01", 79.43), ("2022-03-01", 79.39),
    ("2022-04-01", 79.37), ("2022-05-01", 79.71), ("2022-06-01", 79.8),
    ("2022-07-01", 79.98), ("2022-08-01", 80.28), ("2022-09-01", 80.08),
    ("2022-10-01", 80.48), ("2022-11-01", 80.7), ("2022-12-01", 80.27),
    ("2023-01-01", 80.32), ("2023-02-01", 80.8), ("2023-03-01", 80.2),
    ("2023-04-01", 80.29), ("2023-05-01", 80.65), ("2023-06-01", 80.3),
    ("2023-07-01", 80.76), ("2023-08-01", 81.43), ("2023-09-01", 81.34),
    ("2023-10-01", 81.77), ("2023-11-01", 82.3), ("2023-12-01", 82.67),
];
