pub mod homeworks;
