pub mod macocha_score;
