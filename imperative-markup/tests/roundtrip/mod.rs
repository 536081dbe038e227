mod reader_inverse;
