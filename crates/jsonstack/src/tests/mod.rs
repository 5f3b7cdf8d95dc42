mod parse_bad;
mod roundtrip;
