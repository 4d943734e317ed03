//! Canonical report texts, one bundle per status code.
//!
//! Markdown in `knowledge` is rendered by the frontend as-is.

use super::StaticBundle;

pub(crate) const OPMD_POSITIVE: StaticBundle = StaticBundle {
    finding: "潜在恶性疾病阳性待排",
    knowledge: "# 口腔黏膜潜在恶性疾病阳性？科学认知与管理指南\n\n## 一、正确理解“口腔黏膜潜在恶性疾病”\n\n“潜在恶性疾病”听起来可能有些令人紧张，但请正确理解：它**不是癌症**，而是指一类发生于口腔黏膜的、有更高癌变风险的病变。它们是身体发出的“警示信号”，提醒我们需要比以往更加关注口腔健康。只要我们给予足够的重视，通过科学的监测和及时的干预，绝大多数病变都可以得到有效控制，癌变的风险也能被降到最低。\n\n口腔黏膜潜在恶性疾病包括：口腔白斑，增殖性疣状白斑，口腔红斑，口腔黏膜下纤维性变，口腔扁平苔藓，光化性唇炎，倒吸烟相关腭部病损，口腔红斑狼疮，先天性角化异常，口腔苔藓样病变，口腔移植物抗宿主病。\n\n## 二、需要警惕的“警示信号”：哪些迹象需及时就医？\n\n当您的口腔内出现以下任何一种情况，且持续存在超过2-4周未能自行愈合时，都应及时就医检查：\n\n（1）颜色异常：出现无法擦掉的白色斑块（白斑）、鲜红色斑块（红斑）或红白相间的斑块。\n\n（2）质地改变：黏膜表面变得粗糙、增厚、变硬，或出现像菜花、桑葚一样的疣状增生。\n\n（3）长期不愈的溃疡：任何部位出现的固定、边缘不清晰、基底发硬的溃疡或糜烂。\n\n（4）功能障碍：无明显原因地出现进行性的张口困难、舌头活动不灵、吞咽或说话困难。\n\n（5）异常感觉：口腔内出现反复的烧灼感、麻木感、干燥感或不明原因的疼痛。\n\n## 三、致病原因与高危因素\n\n（1）烟草与酒精：长期、大量的吸烟和饮酒是诱发多种口腔黏膜病变及口腔癌的**头号元凶**。\n\n（2）咀嚼槟榔：这是导致“口腔黏膜下纤维化”的**最主要原因**，具有极强的致病性和致癌性。\n\n（3）局部慢性刺激：尖锐的牙尖、牙齿残根、不合适的假牙或修复体长期摩擦口腔黏膜。\n\n（4）不良饮食习惯：长期偏爱过烫、辛辣刺激的食物。\n\n（5）病毒感染：特定亚型的人乳头瘤病毒（HPV）感染与某些病变的发生有关。\n\n（6）其他因素：包括营养不良（如缺乏维生素A、B族）、免疫功能紊乱、遗传易感性、过度日光照射（与唇部病变相关）等。\n\n## 四、诊断与治疗方式\n\n## 诊断金标准——病理活检\n\n对于可疑的病变，医生通常会取一小块组织（约绿豆大小）进行病理学检查。这是判断病变良恶性、有无癌变倾向的**唯一可靠方法**。请不要惧怕活检，它是一个简单、安全且至关重要的步骤。\n\n## 治疗核心原则——个体化与系统化\n\n（1）去除病因是第一步：立即戒烟、戒酒、戒槟榔，调整或去除口腔内一切不良刺激物。这是所有治疗的基础。\n\n（2）定期随访是基石：对于低风险的病变，最重要的“治疗”就是遵医嘱定期复查（通常为3-6个月或1年）。医生会严密监测病变的变化。\n\n（3）积极干预是手段：对于经活检证实有中、重度不典型增生（即癌变风险较高）的病变，医生会根据具体情况，采取药物、激光、冷冻或手术切除等方式进行干预。\n\n## 五、患者的自我管理与配合\n\n管理口腔黏膜潜在恶性疾病，是一场需要您深度参与的“持久战”。您的积极配合至关重要：\n\n（1）坚决戒除不良习惯：这是您可以为自己做的**最重要的一件事**。\n\n（2）养成自我检查习惯：每月一次，在光线充足的地方，用镜子仔细检查自己的口腔（包括唇、颊、舌、上颚、口底等所有角落），留意任何新出现的变化。\n\n（3）保持良好口腔卫生：使用软毛牙刷，温和刷牙，餐后漱口。\n\n（4）调整生活方式：均衡饮食，多吃新鲜蔬果，保证充足睡眠，适度锻炼，保持乐观心态，减轻精神压力。\n\n（5）绝对不要错过任何一次复查：请将复查日期标记在日历上。您的坚持，是对自己健康的最大负责。\n\n请记住，发现潜在恶性疾病并不可怕，可怕的是忽视与拖延。让我们医患携手，科学管理，防患于未然，共同守护您的口腔与全身健康！",
    recommendation: "系统在您提交的照片中发现了一些与潜在健康风险有关的特征，需要由经验更丰富的口腔黏膜专科医生为您做一次更深入、更全面的检查来确认。建议您尽快预约三甲医院或口腔专科医院的“口腔黏膜科”或“口腔内科”，寻求专业帮助，保障口腔健康。\n\n本AI筛查结果仅为辅助诊断参考，不能取代执业医师的专业诊断。",
    report_recommendation: "尽快预约专科门诊：请您尽快预约三甲医院或口腔专科医院的“口腔黏膜科”或“口腔内科”。\n\n 保持积极心态：请不要过分紧张或焦虑。早期发现并寻求专业帮助，是保障口腔健康最好的方式。在专科医生给出明确诊断前，请保持正常生活，但建议暂停吸烟、饮酒等不良习惯。\n\n请注意：本筛查旨在提高潜在风险病变的检出率，需与临床诊断结合进行综合评估。",
};

pub(crate) const OPMD_SUSPECTED: StaticBundle = StaticBundle {
    finding: "潜在恶性疾病疑似阳性待排",
    knowledge: "# 口腔黏膜潜在恶性疾病疑似阳性？科学认知与管理指南\n\n## 一、正确理解“口腔黏膜潜在恶性疾病”\n\n“潜在恶性疾病”听起来可能有些令人紧张，但请正确理解：它**不是癌症**，而是指一类发生于口腔黏膜的、有更高癌变风险的病变。它们是身体发出的“警示信号”，提醒我们需要比以往更加关注口腔健康。只要我们给予足够的重视，通过科学的监测和及时的干预，绝大多数病变都可以得到有效控制，癌变的风险也能被降到最低。\n\n口腔黏膜潜在恶性疾病包括：口腔白斑，增殖性疣状白斑，口腔红斑，口腔黏膜下纤维性变，口腔扁平苔藓，光化性唇炎，倒吸烟相关腭部病损，口腔红斑狼疮，先天性角化异常，口腔苔藓样病变，口腔移植物抗宿主病。\n\n## 二、需要警惕的“警示信号”：哪些迹象需及时就医？\n\n当您的口腔内出现以下任何一种情况，且持续存在超过2-4周未能自行愈合时，都应及时就医检查：\n\n（1）颜色异常：出现无法擦掉的白色斑块（白斑）、鲜红色斑块（红斑）或红白相间的斑块。\n\n（2）质地改变：黏膜表面变得粗糙、增厚、变硬，或出现像菜花、桑葚一样的疣状增生。\n\n（3）长期不愈的溃疡：任何部位出现的固定、边缘不清晰、基底发硬的溃疡或糜烂。\n\n（4）功能障碍：无明显原因地出现进行性的张口困难、舌头活动不灵、吞咽或说话困难。\n\n（5）异常感觉：口腔内出现反复的烧灼感、麻木感、干燥感或不明原因的疼痛。\n\n## 三、致病原因与高危因素\n\n（1）烟草与酒精：长期、大量的吸烟和饮酒是诱发多种口腔黏膜病变及口腔癌的**头号元凶**。\n\n（2）咀嚼槟榔：这是导致“口腔黏膜下纤维化”的**最主要原因**，具有极强的致病性和致癌性。\n\n（3）局部慢性刺激：尖锐的牙尖、牙齿残根、不合适的假牙或修复体长期摩擦口腔黏膜。\n\n（4）不良饮食习惯：长期偏爱过烫、辛辣刺激的食物。\n\n（5）病毒感染：特定亚型的人乳头瘤病毒（HPV）感染与某些病变的发生有关。\n\n（6）其他因素：包括营养不良（如缺乏维生素A、B族）、免疫功能紊乱、遗传易感性、过度日光照射（与唇部病变相关）等。\n\n## 四、诊断与治疗方式\n\n## 诊断金标准——病理活检\n\n对于可疑的病变，医生通常会取一小块组织（约绿豆大小）进行病理学检查。这是判断病变良恶性、有无癌变倾向的**唯一可靠方法**。请不要惧怕活检，它是一个简单、安全且至关重要的步骤。\n\n## 治疗核心原则——个体化与系统化\n\n（1）去除病因是第一步：立即戒烟、戒酒、戒槟榔，调整或去除口腔内一切不良刺激物。这是所有治疗的基础。\n\n（2）定期随访是基石：对于低风险的病变，最重要的“治疗”就是遵医嘱定期复查（通常为3-6个月或1年）。医生会严密监测病变的变化。\n\n（3）积极干预是手段：对于经活检证实有中、重度不典型增生（即癌变风险较高）的病变，医生会根据具体情况，采取药物、激光、冷冻或手术切除等方式进行干预。\n\n## 五、患者的自我管理与配合\n\n管理口腔黏膜潜在恶性疾病，是一场需要您深度参与的“持久战”。您的积极配合至关重要：\n\n（1）坚决戒除不良习惯：这是您可以为自己做的**最重要的一件事**。\n\n（2）养成自我检查习惯：每月一次，在光线充足的地方，用镜子仔细检查自己的口腔（包括唇、颊、舌、上颚、口底等所有角落），留意任何新出现的变化。\n\n（3）保持良好口腔卫生：使用软毛牙刷，温和刷牙，餐后漱口。\n\n（4）调整生活方式：均衡饮食，多吃新鲜蔬果，保证充足睡眠，适度锻炼，保持乐观心态，减轻精神压力。\n\n（5）绝对不要错过任何一次复查：请将复查日期标记在日历上。您的坚持，是对自己健康的最大负责。\n\n请记住，发现潜在恶性疾病并不可怕，可怕的是忽视与拖延。让我们医患携手，科学管理，防患于未然，共同守护您的口腔与全身健康！",
    recommendation: "系统在您提交的照片中发现了可能与潜在健康风险有关的特征，需要由经验更丰富的口腔黏膜专科医生进一步确认。建议您尽快预约三甲医院或口腔专科医院的“口腔黏膜科”或“口腔内科”，寻求专业帮助，保障口腔健康。\n\n本AI筛查结果仅为辅助诊断参考，不能取代执业医师的专业诊断。",
    report_recommendation: "尽快预约专科门诊：请您尽快预约三甲医院或口腔专科医院的“口腔黏膜科”或“口腔内科”。\n\n 保持积极心态：请不要过分紧张或焦虑。早期发现并寻求专业帮助，是保障口腔健康最好的方式。在专科医生给出明确诊断前，请保持正常生活，但建议暂停吸烟、饮酒等不良习惯。\n\n请注意：本筛查旨在提高潜在风险病变的检出率，需与临床诊断结合进行综合评估。",
};

pub(crate) const OPMD_NEGATIVE: StaticBundle = StaticBundle {
    finding: "潜在恶性疾病阴性待排",
    knowledge: "# 口腔黏膜潜在恶性疾病阴性？科学认知与管理指南\n\n## 一、正确理解“口腔黏膜潜在恶性疾病”\n\n“潜在恶性疾病”听起来可能有些令人紧张，但请正确理解：它**不是癌症**，而是指一类发生于口腔黏膜的、有更高癌变风险的病变。它们是身体发出的“警示信号”，提醒我们需要比以往更加关注口腔健康。只要我们给予足够的重视，通过科学的监测和及时的干预，绝大多数病变都可以得到有效控制，癌变的风险也能被降到最低。\n\n口腔黏膜潜在恶性疾病包括：口腔白斑，增殖性疣状白斑，口腔红斑，口腔黏膜下纤维性变，口腔扁平苔藓，光化性唇炎，倒吸烟相关腭部病损，口腔红斑狼疮，先天性角化异常，口腔苔藓样病变，口腔移植物抗宿主病。\n\n## 二、需要警惕的“警示信号”：哪些迹象需及时就医？\n\n当您的口腔内出现以下任何一种情况，且持续存在超过2-4周未能自行愈合时，都应及时就医检查：\n\n（1）颜色异常：出现无法擦掉的白色斑块（白斑）、鲜红色斑块（红斑）或红白相间的斑块。\n\n（2）质地改变：黏膜表面变得粗糙、增厚、变硬，或出现像菜花、桑葚一样的疣状增生。\n\n（3）长期不愈的溃疡：任何部位出现的固定、边缘不清晰、基底发硬的溃疡或糜烂。\n\n（4）功能障碍：无明显原因地出现进行性的张口困难、舌头活动不灵、吞咽或说话困难。\n\n（5）异常感觉：口腔内出现反复的烧灼感、麻木感、干燥感或不明原因的疼痛。\n\n## 三、致病原因与高危因素\n\n（1）烟草与酒精：长期、大量的吸烟和饮酒是诱发多种口腔黏膜病变及口腔癌的**头号元凶**。\n\n（2）咀嚼槟榔：这是导致“口腔黏膜下纤维化”的**最主要原因**，具有极强的致病性和致癌性。\n\n（3）局部慢性刺激：尖锐的牙尖、牙齿残根、不合适的假牙或修复体长期摩擦口腔黏膜。\n\n（4）不良饮食习惯：长期偏爱过烫、辛辣刺激的食物。\n\n（5）病毒感染：特定亚型的人乳头瘤病毒（HPV）感染与某些病变的发生有关。\n\n（6）其他因素：包括营养不良（如缺乏维生素A、B族）、免疫功能紊乱、遗传易感性、过度日光照射（与唇部病变相关）等。\n\n## 四、诊断与治疗方式\n\n## 诊断金标准——病理活检\n\n对于可疑的病变，医生通常会取一小块组织（约绿豆大小）进行病理学检查。这是判断病变良恶性、有无癌变倾向的**唯一可靠方法**。请不要惧怕活检，它是一个简单、安全且至关重要的步骤。\n\n## 治疗核心原则——个体化与系统化\n\n（1）去除病因是第一步：立即戒烟、戒酒、戒槟榔，调整或去除口腔内一切不良刺激物。这是所有治疗的基础。\n\n（2）定期随访是基石：对于低风险的病变，最重要的“治疗”就是遵医嘱定期复查（通常为3-6个月或1年）。医生会严密监测病变的变化。\n\n（3）积极干预是手段：对于经活检证实有中、重度不典型增生（即癌变风险较高）的病变，医生会根据具体情况，采取药物、激光、冷冻或手术切除等方式进行干预。\n\n## 五、患者的自我管理与配合\n\n管理口腔黏膜潜在恶性疾病，是一场需要您深度参与的“持久战”。您的积极配合至关重要：\n\n（1）坚决戒除不良习惯：这是您可以为自己做的**最重要的一件事**。\n\n（2）养成自我检查习惯：每月一次，在光线充足的地方，用镜子仔细检查自己的口腔（包括唇、颊、舌、上颚、口底等所有角落），留意任何新出现的变化。\n\n（3）保持良好口腔卫生：使用软毛牙刷，温和刷牙，餐后漱口。\n\n（4）调整生活方式：均衡饮食，多吃新鲜蔬果，保证充足睡眠，适度锻炼，保持乐观心态，减轻精神压力。\n\n（5）绝对不要错过任何一次复查：请将复查日期标记在日历上。您的坚持，是对自己健康的最大负责。\n\n请记住，发现潜在恶性疾病并不可怕，可怕的是忽视与拖延。让我们医患携手，科学管理，防患于未然，共同守护您的口腔与全身健康！",
    recommendation: "系统未在您提交的口腔图片中发现与口腔黏膜潜在恶性疾病的明显迹象。希望您保持健康生活习惯，定期进行专业检查。\n\n本AI筛查结果仅为辅助诊断参考，不能取代执业医师的专业诊断。",
    report_recommendation: "保持良好习惯：保持健康的生活方式，如戒烟、限酒、不嚼槟榔，避免过烫过辣的饮食。\n\n定期自我检查：定期观察自己的口腔内部，注意有无出现白斑、红斑、不明原因的破溃等情况。\n\n定期专业检查：每年进行一次全面的口腔检查。任何微小的变化，医生都能比您更早发现。\n\n请注意：本筛查旨在提高潜在风险病变的检出率，需与临床诊断结合进行综合评估。",
};

pub(crate) const OLK_POSITIVE: StaticBundle = StaticBundle {
    finding: "口腔白斑病（OLK） 阳性待排",
    knowledge: "# 口腔白斑健康教育\n\n说起“口腔白斑”，很多患者朋友们往往会顾名思义，认为凡是发生在口腔粘膜上的白色斑块都是白斑，一旦发生白斑就会有恶变的可能，其实这种理解是不对的，**口腔白斑病人约3%---5%会发生癌变**。2005年WHO将口腔白斑归为癌前病变，“癌前病变”不是“癌”，只因为口腔白斑病理表现为上皮异常增生，所以癌变机率高于正常上皮组织。口腔粘膜白斑可表现为五种形态特征：斑块状、皱纹纸状、颗粒状、疣状、溃疡状，前两类为均质型，后三类为非均质型，**非均质型癌变几率大于均质型**。国内研究显示，**女性患者白斑的危险性是男性的2.49倍**，**舌部及口底白斑危险性高于其他部位**，**疣状白斑的危险性是均质型白斑的10倍**。根据口腔病理改变，口腔粘膜白斑分为轻、中、重度异常增生，**中度异常增生白斑的危险性是单纯增生或轻度异常增生性白斑的276.48倍**，**重度异常增生白斑癌变风险是单纯增生或轻度异常增生性白斑的499.55倍**。\n\n# 口腔白斑癌变倾向较高的情况\n有以下情况的口腔白斑患者癌变倾向较大，应该提高警惕，严密观察，必要时可进行多次组织活检：\n（1）年龄：年龄较大，如60岁以上者；\n（2）性别：不吸烟的女性，特别是年轻女性患者，这种特发性白斑恶变可能性大；\n（3）吸烟：吸烟时间长，烟量大（如吸烟年数×每天支数>400)者；\n（4）部位：舌缘、舌腹、口底及口角部位；\n（5）类型：疣状，颗粒型，溃疡或糜烂型及伴有念珠菌感染者；\n（6）病理：伴有上皮异常增生者，程度越重越易恶变；\n（7）时间：病变时间较长者；\n（8）症状：有刺激性痛或自发痛者。\n\n# 口腔白斑的发病原因\n为什么会生口腔白斑？具体原因如下：\n（1）吸烟等理化刺激：与白斑的发生密切相关，白斑的发生率与吸烟时间的长短及吸烟量呈正比关系。发病部位与烟接触口腔的方式、烟雾刺激的部位有关。吸烟对口腔黏膜可以产生物理、化学刺激引起口腔黏膜的病理性变化。吸烟时产生的高温对口腔有灼伤作用，引起局部黏膜充血、水肿，同时烟和烟燃烧时产生的烟雾中含有尼古丁、焦油、二苯蒽等致癌物质。这些有害的物质可直接进入口腔黏膜上皮，破坏黏膜上皮，通过长期慢性刺激，使局部形成一种慢性炎症过程，机体产生一种防御性的增生反应；\n（2）局部刺激：饮酒、进食过烫或酸辣食物、嚼槟榔等均与白斑形成相关。食用刺激性食物如烫、辣、硬食会使上消化道黏膜组织发生不同程度的损伤，轻者导致黏膜充血、水肿、变性、渗出，形成炎症，重者组织细胞坏死、脱落形成糜烂和浅表溃疡，继而上皮修复增生、过度增生而发生黏膜白斑；\n（3）白色念珠菌感染：与白斑有密切关系，据国内学者调查，我国口腔白斑患者中，白色念珠菌阳性率为34%左右。用白色念珠菌感染动物可制备白斑动物模型，显示白色念珠菌可能是白斑发生的一个重要致病因素或是其中的一种合并因素。临床表明，伴有白色念珠菌感染的白斑——“白念白斑”容易发生恶性病变；\n（4）全身因素：包括微量元素、微循环改变、易感的遗传素质、脂溶性维生素缺乏等；\n（5）中医观点：中医认为口腔黏膜与病人全身因素，特别是气血循环障碍有很大关系。一些患者用中药活血化瘀治疗取得较好的效果就是一个例证；\n（6）其他相关因素：迄今为止，对口腔白斑癌变的发病原因尚不明确，但普遍认为白斑癌变与理化因素长期作用、致癌剂损伤、遗传物质以及免疫功能不全有关。近来研究表明，白斑的发生与人类乳头状瘤病毒(HPV)的感染有密切关系。在口腔黏膜白斑中发现有可诱发癌变的HPV16感染；同时，中医还认为，肺胃积热、外感毒邪，内外合邪，熏蒸于上或下流注而发本病。\n\n# 口腔白斑的治疗方法\n\n ## 常规治疗 \n\n治疗第一步是去除任何可能的刺激因素，去除残根、残冠及不良修复体，纠正不良生活习惯。例如戒烟戒酒，不吃刺激食品和过烫、粗糙食物等。然后根据不同的病情决定用药还是采用激光、冷冻、微波等其他治疗方案。**定期随访是非常重要的**，如果观察到白斑增厚、变硬、出现溃疡等的时候，应及时手术切除。对于癌变危险性高的，我们也要及时切除活检。\n\n ## 中医治疗 \n\n对白斑进行中医分型辩证施治也是一种治疗方法，但是同样做不到根治。比如痰湿凝聚型的白斑给予健脾化湿消斑；气血亏虚型的给予补气益血祛斑；瘀血内阻型的给予活血化瘀化斑。祖国的医学文献中有不少可以用于治疗口腔黏膜病的“经方”，但是没有“一方特治一病”的记载。目前我们通过发掘中医药古方和总结临床经验相结合，形成了一些相对固定的方剂和制剂，例如复方绞股蓝胶囊、五白方、双花方等，经过辩证用于某些口腔黏膜病，有一定的疗效，但是不能称之为特效药。",
    recommendation: "AI系统检测出口腔白斑病。口腔白斑病是一种发生在口腔黏膜上的、不能被擦去的、白色斑块或斑片。口腔白斑病的癌变风险与其临床类型及病理分级密切相关。非均质型（如颗粒状、疣状、溃疡状）的风险通常高于均质型。建议尽快就诊口腔黏膜专科/口腔内科，医生可能建议进行真菌学评估、去除刺激因素，并在评估后进行组织病理学活检以明确分型与风险。",
    report_recommendation: "尽快预约专科门诊：请您尽快预约三甲医院或口腔专科医院的“口腔黏膜科”或“口腔内科”。\n\n 保持积极心态：请不要过分紧张或焦虑。早期发现并寻求专业帮助，是保障口腔健康最好的方式。在专科医生给出明确诊断前，请保持正常生活，但建议暂停吸烟、饮酒等不良习惯。\n\n请注意：本筛查旨在提高潜在风险病变的检出率，需与临床诊断结合进行综合评估。",
};

pub(crate) const OLP_POSITIVE: StaticBundle = StaticBundle {
    finding: "口腔扁平苔藓（OLP） 阳性待排",
    knowledge: "# 口腔扁平苔藓健康教育\n\n口腔扁平苔藓是口腔黏膜病种仅次于复发性阿弗他溃疡的常见良性疾病，其患病率约0.1%—4%。该病好发于中年人，女性多于男性。多数患者有疼痛、粗糙等不适感觉。如长期糜烂则可能易恶变，WHO（世界卫生组织）将其列入潜在恶性疾病的范畴。\n\n## 口腔扁平苔藓会传染吗?\n\n口腔扁平苔藓是一种发生于口腔的慢性炎性疾病，**不会传染**，因此患者的食物和餐具也无须和家人分开。\n\n## 口腔扁平苔藓会遗传吗?\n\n目前尚无确切证据证实该疾病会遗传，学术界存在不同意见。但曾有研究发现在一个家庭中发现有数人发病；有些患者有家族史。\n\n## 口腔扁平苔藓患者要戒烟戒酒吗?\n\n口腔扁平苔藓患者应**戒烟、戒酒**。有研究表明，烟、酒刺激易致口腔黏膜病损癌变。\n\n## 口腔扁平苔藓能治愈吗?如果能治愈，还会复发吗?\n\n该病的病因尚未完全明确。因为口腔扁平苔藓是口腔黏膜慢性炎性疾病，所以**易复发**。积极预防和治疗系统性疾病可以减少口腔扁平苔藓复发，有利于病损的愈合。有的患者以控制糜烂为主。患者应遵照医嘱**定期复查**，复查周期建议不要超过半年。**忌口**对于防止口腔扁平苔藓复发非常关键，过度的疲劳或一顿放纵的饮食，都可能造成该疾病的复发。\n\n## 口腔扁平苔藓患者的日常护理\n\n(1) 没有自觉症状的患者，让自己身心放松，生活要乐观向上，劳逸结合，加强体育锻炼，并定期随访。\n\n(2) 对糜烂经久不愈者，要及时就医，追踪观察，必要时取病理。给予个体化软食，注意补充优质蛋白和各类维生素，保证自身营养均衡。\n\n(3) 平日生活中应尽量避免进食烫、辣（生葱、生蒜、辣椒）、麻（花椒）、涩（猕猴桃、菠萝、柿子、蚕豆、笋)、冰等食物；同时，过硬（炒瓜子、油炸）、过大的食物也会增加黏膜的摩擦，导致疾病发生发展。\n\n(4) 羊肉、狗肉、马肉、鹿肉、驴肉等肉食属温热食，**尽可能少食**。鱼虾、海鲜在去壳、去刺的情况下，一般还是可以食用的。\n\n(5) 日常生活中，一些不健康动作如：咬舌、咬唇、咬颊等，时间长会损害黏膜上皮。老年人尤其要提防自己的假牙，检查假牙是否合适。选用柔软毛刷牙。\n\n(6) 加强口腔卫生，食用牛奶或含糖高的饮料后清水漱口。龋齿、牙齿不良修复体要积极治疗。\n\n## 心理因素会导致口腔扁平苔藓的发生吗?\n\n研究表明，口腔扁平苔藓的发生、发展与身心因素有密切关系。50%的该疾病患者有精神创伤史，或生活压力过大，或精神生活空虚等。临床中常见到因这种心理异常导致机体功能紊乱，促使口腔扁平苔藓发病、病情加重或反复发作、迁延不愈。",
    recommendation: "AI系统检测出口腔扁平苔藓。口腔扁平苔藓常见白色网状/蕾丝样细纹，可能伴有红斑或糜烂，部分患者有灼痛、粗糙或刺激痛。长期或反复糜烂者需密切随访。建议尽快就诊口腔黏膜专科/口腔内科，医生可能建议进行真菌学评估、去除刺激因素，并在评估后进行组织病理学活检以明确分型与风险。",
    report_recommendation: "尽快预约专科门诊：请您尽快预约三甲医院或口腔专科医院的“口腔黏膜科”或“口腔内科”。\n\n 保持积极心态：请不要过分紧张或焦虑。早期发现并寻求专业帮助，是保障口腔健康最好的方式。在专科医生给出明确诊断前，请保持正常生活，但建议暂停吸烟、饮酒等不良习惯。\n\n请注意：本筛查旨在提高潜在风险病变的检出率，需与临床诊断结合进行综合评估。",
};

pub(crate) const OSF_POSITIVE: StaticBundle = StaticBundle {
    finding: "口腔黏膜下纤维性变（OSF） 阳性待排",
    knowledge: "# 口腔黏膜下纤维性变（OSF）\n\n口腔黏膜下纤维性变（OSF）是一种可累及全部口腔黏膜的慢性口腔黏膜疾病。该病具有一定的**恶性潜能**，属于**口腔潜在恶性疾患**的一种，可能发展成为口腔癌。研究表明，在咀嚼槟榔人群中，OSF**癌变率约7%-30%**。OSF的发病和咀嚼槟榔**密切相关**。此外，进食辣椒、吸烟、饮酒等刺激因素，营养元素缺乏，免疫因素、遗传因素、微循环障碍、血液流变学异常等其他因素亦参与OSF的疾病发生发展。\n\n## 临床表现\n\nOSF的临床表现主要为口腔黏膜灼痛、进食刺激性食物烧灼痛、黏膜发紧导致不能鼓颊或吹口哨等张口受限症状。临床检查可发现口腔黏膜色苍白、黏膜弹性下降变硬、纤维条索形成、张口度减小、黏膜水疱或溃疡形成、小唾液腺分泌障碍等。\n\n## 诊断\n\n临床上，一般根据咀嚼槟榔病史和临床表现进行疾病的初步诊断，**组织病理学**是判断OSF严重程度及是否癌变的**金标准**，此外，对于初诊OSF进行活检还能为疾病提供基线资料，因此**推荐OSF初诊患者进行组织病理学检查**。为满足广大口腔黏膜病患者的需求，浙大口腔黏膜病科室现开展自体荧光检查及甲苯胺蓝检查等无创检查可进行早癌辅助筛查。\n\n## 治疗\n\n（1）改善不良生活习惯：戒除咀嚼槟榔习惯，戒烟，戒酒，减少辛辣、刺激、粗糙食物，补充维生素和微量元素，防治营养不良。这也是**最重要的治疗方式之一**。\n\n（2）药物治疗：原则为抗炎、抗纤维化、改善缺血以及抗氧化，包括局部药物治疗与口服药物治疗。局部药物治疗主要指在病损区行局部封闭治疗，一般1周一次，4-10周为一个疗程，每个疗程间隔1-2个月。口服治疗主要包括丹参滴丸、番茄红素、维生素、微量元素、中药等。\n\n（3）非药物治疗：包含张口训练，光动力治疗，激光治疗，高压氧治疗等。\n\n（4）手术治疗：主要应用于张口受限严重，伴发白斑或口腔鳞状细胞癌等人群。\n\n## 重要提示\n\n需要注意的是，无论采取何种治疗手段，均无法彻底阻断OSF的癌变，所以**定期复诊十分重要**，定期复诊可以使医生发现早期癌变，及时干预。",
    recommendation: "AI系统检测出口腔黏膜下纤维性变。口腔黏膜下纤维性变与咀嚼槟榔高度相关。特征为黏膜苍白、弹性丧失，导致张口困难、烧灼感，癌变风险很高。典型症状为进行性张口受限。建议尽快就诊口腔黏膜专科/口腔内科，医生可能建议进行真菌学评估、去除刺激因素，并在评估后进行组织病理学活检以明确分型与风险。",
    report_recommendation: "尽快预约专科门诊：请您尽快预约三甲医院或口腔专科医院的“口腔黏膜科”或“口腔内科”。\n\n 保持积极心态：请不要过分紧张或焦虑。早期发现并寻求专业帮助，是保障口腔健康最好的方式。在专科医生给出明确诊断前，请保持正常生活，但建议暂停吸烟、饮酒等不良习惯。\n\n请注意：本筛查旨在提高潜在风险病变的检出率，需与临床诊断结合进行综合评估。",
};
