// Monthly NIFTY 50 close.
pub const ROWS: &[(&str, f64)] = &[
    ("2019-01-01", 10590.51), ("2019-02-01", 10856.34), ("2019-03-01", 11342.56),
    ("2019-04-01", 11732.71), ("2019-05-01", 11985.92), ("2019-06-01", 12067.73),
    ("2019-07-01", 12784.96), ("2019-08-01", 12684.49), ("2019-09-01", 13365.43),
    ("2019-10-01", 13264.39), ("2019-11-01", 13266.32), ("2019-12-01", 13605.97),
    ("2020-01-01", 13678.38), ("2020-02-01", 14254.72), ("2020-03-01", 11053.77),
    ("2020-04-01", 11851.33), ("2020-05-01", 12573.24), ("2020-06-01", 14352.96),
    ("2020-07-01", 14567.77), ("2020-08-01", 14734.49), ("2020-09-01", 14627.34),
    ("2020-10-01", 14926.07), ("2020-11-01", 14907.92), ("2020-12-01", 15144.97),
    ("2021-01-01", 14851.91), ("2021-02-01", 14814.43), ("2021-03-01", 15269.97),
    ("2021-04-01", 15191.08), ("2021-05-01", 15392.69), ("2021-06-01", 15443.5),
    ("2021-07-01", 15411.31), ("2021-08-01", 15719.75), ("2021-09-01", 15794.51),
    ("2021-10-01", 16263.42), ("2021-11-01", 16289.26), ("2021-12-01", 16523.97),
    ("2022-01-01", 16928.81), ("2022-02-01", 16750.26), ("2022-03-01", 17242.64),
    ("2022-04-01", 17394.25), ("2022-05-01", 17475.25), ("2022-06-01", 18163.57),
    ("2022-07-01", 18156.42), ("2022-08-01", 18841.04), ("2022-09-01", 18900.6),
    ("2022-10-01", 19473.98), ("2022-11-01", 19772.54), ("2022-12-01", 19808.31),
    ("2023-01-01", 20386.98), ("2023-02-01", 20234.38), ("2023-03-01", 20558.33),
    ("2023-04-01", 20971.56), ("2023-05-01", 21084.21), ("2023-06-01", 21407.21),
    ("2023-07-01", 21707.31), ("2023-08-01", 21975.31), ("2023-09-01", 22106.74),
    ("2023-10-01", 21925.61), ("2023-11-01", 22500.65), ("2023-12-01", 22634.2),
];
