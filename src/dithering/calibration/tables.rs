use super::Coefficients;

const fn c(right: u32, down_left: u32, down: u32, sum: u32) -> Coefficients {
    Coefficients::new(right, down_left, down, sum)
}

/// Diffusion weights per original intensity level.
pub static COEFFICIENTS: [Coefficients; 256] = [
    c(13, 0, 5, 18), // 0
    c(1300249, 0, 499250, 1799499),
    c(214114, 287, 99357, 313758),
    c(351854, 0, 199965, 551819),
    c(801100, 0, 490999, 1292099),
    c(801100, 0, 490999, 1292099),
    c(801100, 0, 490999, 1292099),
    c(801100, 0, 490999, 1292099),
    c(801100, 0, 490999, 1292099),
    c(801100, 0, 490999, 1292099),
    c(704075, 297466, 303694, 1305235),
    c(704075, 297466, 303694, 1305235),
    c(704075, 297466, 303694, 1305235),
    c(704075, 297466, 303694, 1305235),
    c(704075, 297466, 303694, 1305235),
    c(704075, 297466, 303694, 1305235),
    c(704075, 297466, 303694, 1305235), // 16
    c(704075, 297466, 303694, 1305235),
    c(704075, 297466, 303694, 1305235),
    c(704075, 297466, 303694, 1305235),
    c(704075, 297466, 303694, 1305235),
    c(704075, 297466, 303694, 1305235),
    c(46613, 31917, 21469, 99999),
    c(46613, 31917, 21469, 99999),
    c(46613, 31917, 21469, 99999),
    c(46613, 31917, 21469, 99999),
    c(46613, 31917, 21469, 99999),
    c(46613, 31917, 21469, 99999),
    c(46613, 31917, 21469, 99999),
    c(46613, 31917, 21469, 99999),
    c(46613, 31917, 21469, 99999),
    c(46613, 31917, 21469, 99999),
    c(47482, 30617, 21900, 99999), // 32
    c(47482, 30617, 21900, 99999),
    c(47482, 30617, 21900, 99999),
    c(47482, 30617, 21900, 99999),
    c(47482, 30617, 21900, 99999),
    c(47482, 30617, 21900, 99999),
    c(47482, 30617, 21900, 99999),
    c(47482, 30617, 21900, 99999),
    c(47482, 30617, 21900, 99999),
    c(47482, 30617, 21900, 99999),
    c(47482, 30617, 21900, 99999),
    c(47482, 30617, 21900, 99999),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981), // 48
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(36411, 43219, 20369, 99999), // 64
    c(36411, 43219, 20369, 99999),
    c(36411, 43219, 20369, 99999),
    c(36411, 43219, 20369, 99999),
    c(36411, 43219, 20369, 99999),
    c(36411, 43219, 20369, 99999),
    c(36411, 43219, 20369, 99999),
    c(36411, 43219, 20369, 99999),
    c(38477, 53843, 7678, 99998),
    c(38477, 53843, 7678, 99998),
    c(38477, 53843, 7678, 99998),
    c(38477, 53843, 7678, 99998),
    c(38477, 53843, 7678, 99998),
    c(40503, 51547, 7948, 99998),
    c(40503, 51547, 7948, 99998),
    c(40503, 51547, 7948, 99998),
    c(40503, 51547, 7948, 99998), // 80
    c(40503, 51547, 7948, 99998),
    c(40503, 51547, 7948, 99998),
    c(40503, 51547, 7948, 99998),
    c(40503, 51547, 7948, 99998),
    c(35865, 34108, 30026, 99999),
    c(35865, 34108, 30026, 99999),
    c(35865, 34108, 30026, 99999),
    c(35865, 34108, 30026, 99999),
    c(35865, 34108, 30026, 99999),
    c(35865, 34108, 30026, 99999),
    c(35865, 34108, 30026, 99999),
    c(35865, 34108, 30026, 99999),
    c(35865, 34108, 30026, 99999),
    c(35865, 34108, 30026, 99999),
    c(34117, 36899, 28983, 99999),
    c(34117, 36899, 28983, 99999), // 96
    c(34117, 36899, 28983, 99999),
    c(34117, 36899, 28983, 99999),
    c(34117, 36899, 28983, 99999),
    c(34117, 36899, 28983, 99999),
    c(34117, 36899, 28983, 99999),
    c(35464, 35049, 29485, 99998),
    c(35464, 35049, 29485, 99998),
    c(35464, 35049, 29485, 99998),
    c(35464, 35049, 29485, 99998),
    c(35464, 35049, 29485, 99998),
    c(16477, 18810, 14712, 49999),
    c(16477, 18810, 14712, 49999),
    c(16477, 18810, 14712, 49999),
    c(16477, 18810, 14712, 49999),
    c(16477, 18810, 14712, 49999),
    c(33360, 37954, 28685, 99999), // 112
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(35269, 36066, 28664, 99999),
    c(35269, 36066, 28664, 99999), // 128
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(33360, 37954, 28685, 99999),
    c(16477, 18810, 14712, 49999), // 144
    c(16477, 18810, 14712, 49999),
    c(16477, 18810, 14712, 49999),
    c(16477, 18810, 14712, 49999),
    c(16477, 18810, 14712, 49999),
    c(35464, 35049, 29485, 99998),
    c(35464, 35049, 29485, 99998),
    c(35464, 35049, 29485, 99998),
    c(35464, 35049, 29485, 99998),
    c(35464, 35049, 29485, 99998),
    c(34117, 36899, 28983, 99999),
    c(34117, 36899, 28983, 99999),
    c(34117, 36899, 28983, 99999),
    c(34117, 36899, 28983, 99999),
    c(34117, 36899, 28983, 99999),
    c(34117, 36899, 28983, 99999),
    c(34117, 36899, 28983, 99999), // 160
    c(35865, 34108, 30026, 99999),
    c(35865, 34108, 30026, 99999),
    c(35865, 34108, 30026, 99999),
    c(35865, 34108, 30026, 99999),
    c(35865, 34108, 30026, 99999),
    c(35865, 34108, 30026, 99999),
    c(35865, 34108, 30026, 99999),
    c(35865, 34108, 30026, 99999),
    c(35865, 34108, 30026, 99999),
    c(35865, 34108, 30026, 99999),
    c(40503, 51547, 7948, 99998),
    c(40503, 51547, 7948, 99998),
    c(40503, 51547, 7948, 99998),
    c(40503, 51547, 7948, 99998),
    c(40503, 51547, 7948, 99998),
    c(40503, 51547, 7948, 99998), // 176
    c(40503, 51547, 7948, 99998),
    c(40503, 51547, 7948, 99998),
    c(38477, 53843, 7678, 99998),
    c(38477, 53843, 7678, 99998),
    c(38477, 53843, 7678, 99998),
    c(38477, 53843, 7678, 99998),
    c(38477, 53843, 7678, 99998),
    c(36411, 43219, 20369, 99999),
    c(36411, 43219, 20369, 99999),
    c(36411, 43219, 20369, 99999),
    c(36411, 43219, 20369, 99999),
    c(36411, 43219, 20369, 99999),
    c(36411, 43219, 20369, 99999),
    c(36411, 43219, 20369, 99999),
    c(36411, 43219, 20369, 99999),
    c(43024, 42131, 14826, 99981), // 192
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981), // 208
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(43024, 42131, 14826, 99981),
    c(47482, 30617, 21900, 99999),
    c(47482, 30617, 21900, 99999),
    c(47482, 30617, 21900, 99999),
    c(47482, 30617, 21900, 99999),
    c(47482, 30617, 21900, 99999),
    c(47482, 30617, 21900, 99999),
    c(47482, 30617, 21900, 99999),
    c(47482, 30617, 21900, 99999),
    c(47482, 30617, 21900, 99999),
    c(47482, 30617, 21900, 99999),
    c(47482, 30617, 21900, 99999),
    c(47482, 30617, 21900, 99999),
    c(46613, 31917, 21469, 99999), // 224
    c(46613, 31917, 21469, 99999),
    c(46613, 31917, 21469, 99999),
    c(46613, 31917, 21469, 99999),
    c(46613, 31917, 21469, 99999),
    c(46613, 31917, 21469, 99999),
    c(46613, 31917, 21469, 99999),
    c(46613, 31917, 21469, 99999),
    c(46613, 31917, 21469, 99999),
    c(46613, 31917, 21469, 99999),
    c(704075, 297466, 303694, 1305235),
    c(704075, 297466, 303694, 1305235),
    c(704075, 297466, 303694, 1305235),
    c(704075, 297466, 303694, 1305235),
    c(704075, 297466, 303694, 1305235),
    c(704075, 297466, 303694, 1305235),
    c(704075, 297466, 303694, 1305235), // 240
    c(704075, 297466, 303694, 1305235),
    c(704075, 297466, 303694, 1305235),
    c(704075, 297466, 303694, 1305235),
    c(704075, 297466, 303694, 1305235),
    c(704075, 297466, 303694, 1305235),
    c(801100, 0, 490999, 1292099),
    c(801100, 0, 490999, 1292099),
    c(801100, 0, 490999, 1292099),
    c(801100, 0, 490999, 1292099),
    c(801100, 0, 490999, 1292099),
    c(801100, 0, 490999, 1292099),
    c(351854, 0, 199965, 551819),
    c(214114, 287, 99357, 313758),
    c(1300249, 0, 499250, 1799499),
    c(13, 0, 5, 18),
];

/// Threshold modulation strength per intensity level, in [0.0, 1.0].
#[rustfmt::skip]
pub static MODULATION_STRENGTH: [f32; 256] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.34, 0.34, 0.34, 0.34,
    0.34, 0.34, 0.34, 0.34, 0.34, 0.34, 0.34, 0.34, 0.34, 0.34, 0.34, 0.34, 0.34, 0.34, 0.34, 0.34,
    0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5,
    0.5, 0.5, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.17,
    0.17, 0.17, 0.17, 0.17, 0.17, 0.17, 0.5, 0.5, 0.5, 0.5, 0.5, 0.7, 0.7, 0.7, 0.7, 0.7,
    0.79, 0.79, 0.79, 0.79, 0.79, 0.79, 0.79, 0.79, 0.79, 0.79, 0.79, 0.79, 0.79, 0.79, 0.79, 1.0,
    1.0, 0.79, 0.79, 0.79, 0.79, 0.79, 0.79, 0.79, 0.79, 0.79, 0.79, 0.79, 0.79, 0.79, 0.79, 0.79,
    0.7, 0.7, 0.7, 0.7, 0.7, 0.5, 0.5, 0.5, 0.5, 0.5, 0.17, 0.17, 0.17, 0.17, 0.17, 0.17,
    0.17, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.5, 0.5, 0.5, 0.5,
    0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5,
    0.34, 0.34, 0.34, 0.34, 0.34, 0.34, 0.34, 0.34, 0.34, 0.34, 0.34, 0.34, 0.34, 0.34, 0.34, 0.34,
    0.34, 0.34, 0.34, 0.34, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
];
