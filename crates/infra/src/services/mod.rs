pub mod ocr;
