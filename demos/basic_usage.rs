use bit_pack::{BitDescriptor, BitPackError, pack, unpack_iter};

fn main() -> Result<(), BitPackError> {
    println!("=== Bit Packing Examples ===\n");

    example_literal_strings()?;
    example_fixed_width()?;
    example_prefix_code()?;

    Ok(())
}

fn example_literal_strings() -> Result<(), BitPackError> {
    println!("Example 1: Packing literal binary strings");

    let buffer = pack(&[
        BitDescriptor::from_binary_str("101")?,
        BitDescriptor::from_binary_str("00001000")?,
        BitDescriptor::from_binary_str("1111111111")?,
        BitDescriptor::from_binary_str("0")?,
        BitDescriptor::from_binary_str("111")?,
    ]);

    // 25 bits -> 4 bytes, the last 7 bits are zero padding
    print!("  Packed into {} bytes:", buffer.len());
    for byte in &buffer {
        print!(" {:08b}", byte);
    }
    println!("\n");

    Ok(())
}

fn example_fixed_width() -> Result<(), BitPackError> {
    println!("Example 2: Fixed-width fields");

    // Three 5-bit palette indices in two bytes instead of three
    let buffer = pack(&[
        BitDescriptor::new(15, 5)?,
        BitDescriptor::new(8, 5)?,
        BitDescriptor::new(23, 5)?,
    ]);

    let indices: Vec<u64> = unpack_iter(&buffer, |pattern| {
        (pattern.len() == 5).then(|| u64::from_str_radix(pattern, 2).unwrap())
    })
    .collect();

    println!("  {} bytes hold indices {:?}", buffer.len(), indices);
    println!();

    Ok(())
}

fn example_prefix_code() -> Result<(), BitPackError> {
    println!("Example 3: Unary prefix code (n zeros, then a one)");

    let values = [3usize, 0, 5, 1];
    let fields: Vec<BitDescriptor> = values
        .iter()
        .map(|&n| BitDescriptor::new(1, n + 1))
        .collect::<Result<_, _>>()?;
    let buffer = pack(&fields);

    let decoded: Vec<usize> = unpack_iter(&buffer, |pattern| {
        pattern.ends_with('1').then(|| pattern.len() - 1)
    })
    .collect();

    println!("  Encoded {:?} in {} bytes", values, buffer.len());
    println!("  Decoded back: {:?}", decoded);

    Ok(())
}
