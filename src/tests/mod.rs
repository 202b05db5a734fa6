mod test_transcript;
