mod data;
mod pipeline;

use std::path::Path;

/// Input expected in the working directory (UCI bank-marketing export).
const INPUT_FILE: &str = "bank-additional-full.csv";
const OUTPUT_FILE: &str = "dataBank_transformed.csv";

/// The literal header contract the downstream model expects; the produced
/// header is compared against this by string equality.
const EXPECTED_HEADER: &str = "age,job=housemaid,job=services,job=admin.,job=blue-collar,job=technician,job=retired,job=management,job=unemployed,job=self-employed,job=unknown,job=entrepreneur,job=student,marital=married,marital=single,marital=divorced,marital=unknown,education=basic.4y,education=high.school,education=basic.6y,education=basic.9y,education=professional.course,education=unknown,education=university.degree,education=illiterate,default=0,default=unknown,default=1,housing=0,housing=1,housing=unknown,loan=0,loan=1,loan=unknown,contact=cellular,month=may,month=jun,month=jul,month=aug,month=oct,month=nov,month=dec,month=mar,month=apr,month=sep,day_of_week=mon,day_of_week=tue,day_of_week=wed,day_of_week=thu,day_of_week=fri,duration,campaign,pdays,previous,poutcome=nonexistent,poutcome=failure,poutcome=success,emp.var.rate,cons.price.idx,cons.conf.idx,euribor3m,nr.employed,class";

fn main() {
    env_logger::init();

    let input = Path::new(INPUT_FILE);
    if !input.exists() {
        println!("File not found: {INPUT_FILE}");
        println!("Please ensure '{INPUT_FILE}' is in the current directory.");
        return;
    }

    match pipeline::run(input, Path::new(OUTPUT_FILE)) {
        Ok(header) => {
            if header == EXPECTED_HEADER {
                println!("Header verification: PASSED");
            } else {
                println!("Header verification: FAILED (Output does not match target)");
            }
        }
        Err(e) => log::error!("Pipeline failed: {e:#}"),
    }
}
