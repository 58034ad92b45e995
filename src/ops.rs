pub mod combinator;
